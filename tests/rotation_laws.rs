use quadrot::{
    compose_rotate, rotate_direct, rotate_ninety, Execution, PixelGrid, RotateError,
    RotationAngle,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ALL_EXECUTIONS: [Execution; 2] = [Execution::Sequential, Execution::Parallel];

fn random_grid(rng: &mut StdRng, rows: usize, cols: usize) -> PixelGrid {
    PixelGrid::from_fn(rows, cols, 3, |_, _, _| rng.random_range(0..=255)).unwrap()
}

/// RGB grid whose red channel carries `values` and whose other channels are
/// derived from it, so any channel shuffle would also be caught.
fn marker_grid(values: &[&[u8]]) -> PixelGrid {
    let rows = values.len();
    let cols = values[0].len();
    PixelGrid::from_fn(rows, cols, 3, |r, c, ch| {
        values[r][c].wrapping_mul(ch as u8 + 1)
    })
    .unwrap()
}

fn red_channel(grid: &PixelGrid) -> Vec<Vec<u8>> {
    (0..grid.rows())
        .map(|r| (0..grid.cols()).map(|c| grid.pixel(r, c).unwrap()[0]).collect())
        .collect()
}

fn rotate(grid: &PixelGrid, angle: RotationAngle) -> PixelGrid {
    rotate_direct(grid, angle, Execution::default()).unwrap()
}

fn shapes() -> Vec<(usize, usize)> {
    vec![(1, 1), (1, 7), (7, 1), (2, 3), (3, 2), (5, 5), (16, 9), (31, 64)]
}

#[test]
fn concrete_two_by_three_scenario() {
    let grid = marker_grid(&[&[1, 2, 3], &[4, 5, 6]]);
    for execution in ALL_EXECUTIONS {
        let r90 = rotate_direct(&grid, RotationAngle::Cw90, execution).unwrap();
        assert_eq!(red_channel(&r90), vec![vec![4, 1], vec![5, 2], vec![6, 3]]);
        assert_eq!(r90, marker_grid(&[&[4, 1], &[5, 2], &[6, 3]]));

        let r180 = rotate_direct(&grid, RotationAngle::Cw180, execution).unwrap();
        assert_eq!(red_channel(&r180), vec![vec![6, 5, 4], vec![3, 2, 1]]);

        let r270 = rotate_direct(&grid, RotationAngle::Cw270, execution).unwrap();
        assert_eq!(red_channel(&r270), vec![vec![3, 6], vec![2, 5], vec![1, 4]]);
    }

    let composed = rotate_ninety(&grid).unwrap();
    assert_eq!(red_channel(&composed), vec![vec![4, 1], vec![5, 2], vec![6, 3]]);
}

#[test]
fn direct_ninety_equals_compose_ninety() {
    let mut rng = StdRng::seed_from_u64(0x90);
    for (rows, cols) in shapes() {
        let grid = random_grid(&mut rng, rows, cols);
        let composed = rotate_ninety(&grid).unwrap();
        for execution in ALL_EXECUTIONS {
            let direct = rotate_direct(&grid, RotationAngle::Cw90, execution).unwrap();
            assert_eq!(direct.first_mismatch(&composed), None, "{rows}x{cols}");
        }
    }
}

#[test]
fn compose_agrees_with_direct_for_every_angle() {
    let mut rng = StdRng::seed_from_u64(7);
    for (rows, cols) in shapes() {
        let grid = random_grid(&mut rng, rows, cols);
        for angle in RotationAngle::ALL {
            let direct = rotate(&grid, angle);
            let composed = compose_rotate(&grid, angle).unwrap();
            assert_eq!(direct, composed, "{angle} on {rows}x{cols}");
        }
    }
}

#[test]
fn half_turn_is_an_involution() {
    let mut rng = StdRng::seed_from_u64(180);
    for (rows, cols) in shapes() {
        let grid = random_grid(&mut rng, rows, cols);
        let once = rotate(&grid, RotationAngle::Cw180);
        assert_eq!(rotate(&once, RotationAngle::Cw180), grid);
    }
}

#[test]
fn quarter_turns_form_a_cyclic_group() {
    let mut rng = StdRng::seed_from_u64(4);
    for (rows, cols) in shapes() {
        let grid = random_grid(&mut rng, rows, cols);

        let mut spun = grid.clone();
        for _ in 0..4 {
            spun = rotate(&spun, RotationAngle::Cw90);
        }
        assert_eq!(spun, grid);

        let there_and_back = rotate(&rotate(&grid, RotationAngle::Cw90), RotationAngle::Cw270);
        assert_eq!(there_and_back, grid);
        let back_and_there = rotate(&rotate(&grid, RotationAngle::Cw270), RotationAngle::Cw90);
        assert_eq!(back_and_there, grid);

        let twice = rotate(&rotate(&grid, RotationAngle::Cw90), RotationAngle::Cw90);
        assert_eq!(twice, rotate(&grid, RotationAngle::Cw180));

        for angle in RotationAngle::ALL {
            assert_eq!(rotate(&rotate(&grid, angle), angle.inverse()), grid);
        }
    }
}

#[test]
fn output_dimensions_follow_the_angle() {
    let grid = PixelGrid::zeroed(4, 9, 3).unwrap();
    let r90 = rotate(&grid, RotationAngle::Cw90);
    assert_eq!((r90.rows(), r90.cols()), (9, 4));
    let r180 = rotate(&grid, RotationAngle::Cw180);
    assert_eq!((r180.rows(), r180.cols()), (4, 9));
    let r270 = rotate(&grid, RotationAngle::Cw270);
    assert_eq!((r270.rows(), r270.cols()), (9, 4));
    assert_eq!(r270.as_slice().len(), grid.as_slice().len());
}

#[test]
fn every_destination_cell_is_written_once() {
    let (rows, cols) = (13, 17);
    // Distinct, non-zero marker per pixel spread over two channels.
    let grid = PixelGrid::from_fn(rows, cols, 3, |r, c, ch| match ch {
        0 => (r + 1) as u8,
        1 => (c + 1) as u8,
        _ => 0xAA,
    })
    .unwrap();

    for execution in ALL_EXECUTIONS {
        for angle in RotationAngle::ALL {
            let out = rotate_direct(&grid, angle, execution).unwrap();
            let mut seen = vec![false; rows * cols];
            for px in out.as_slice().chunks_exact(3) {
                assert!(px[0] != 0 && px[1] != 0, "{angle}: cell left unwritten");
                assert_eq!(px[2], 0xAA);
                let idx = (px[0] as usize - 1) * cols + (px[1] as usize - 1);
                assert!(!seen[idx], "{angle}: source pixel copied twice");
                seen[idx] = true;
            }
            assert!(seen.iter().all(|&s| s));
        }
    }
}

#[test]
fn single_pixel_rotates_to_itself() {
    let grid = PixelGrid::new(vec![10, 20, 30], 1, 1, 3).unwrap();
    for execution in ALL_EXECUTIONS {
        for angle in RotationAngle::ALL {
            assert_eq!(rotate_direct(&grid, angle, execution).unwrap(), grid);
        }
    }
    assert_eq!(rotate_ninety(&grid).unwrap(), grid);
}

#[test]
fn strips_rotate_without_index_overflow() {
    let row = marker_grid(&[&[1, 2, 3, 4, 5]]);
    let col = marker_grid(&[&[1], &[2], &[3], &[4], &[5]]);
    for execution in ALL_EXECUTIONS {
        let r90 = rotate_direct(&row, RotationAngle::Cw90, execution).unwrap();
        assert_eq!(r90, col);
        let r270 = rotate_direct(&row, RotationAngle::Cw270, execution).unwrap();
        assert_eq!(r270, marker_grid(&[&[5], &[4], &[3], &[2], &[1]]));
        let r180 = rotate_direct(&row, RotationAngle::Cw180, execution).unwrap();
        assert_eq!(r180, marker_grid(&[&[5, 4, 3, 2, 1]]));

        let c90 = rotate_direct(&col, RotationAngle::Cw90, execution).unwrap();
        assert_eq!(c90, marker_grid(&[&[5, 4, 3, 2, 1]]));
        let c270 = rotate_direct(&col, RotationAngle::Cw270, execution).unwrap();
        assert_eq!(c270, row);
    }
}

#[test]
fn rotators_reject_unsupported_input() {
    let rgba = PixelGrid::zeroed(3, 3, 4).unwrap();
    for angle in RotationAngle::ALL {
        assert_eq!(
            rotate_direct(&rgba, angle, Execution::Sequential).unwrap_err(),
            RotateError::UnsupportedFormat { channels: 4 }
        );
        assert_eq!(
            compose_rotate(&rgba, angle).unwrap_err(),
            RotateError::UnsupportedFormat { channels: 4 }
        );
    }

    let empty = PixelGrid::zeroed(3, 0, 3).unwrap();
    assert_eq!(
        rotate_ninety(&empty).unwrap_err(),
        RotateError::InvalidDimensions { rows: 3, cols: 0 }
    );
}

#[test]
fn rotation_leaves_input_untouched() {
    let mut rng = StdRng::seed_from_u64(11);
    let grid = random_grid(&mut rng, 6, 4);
    let before = grid.clone();
    for angle in RotationAngle::ALL {
        let _ = rotate(&grid, angle);
        let _ = compose_rotate(&grid, angle).unwrap();
    }
    assert_eq!(grid, before);
}
