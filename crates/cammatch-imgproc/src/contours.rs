use std::collections::HashSet;

use cammatch_image::Image;

use crate::union_find::UnionFind;

/// Offsets of the Moore neighborhood in clockwise order, starting west.
const MOORE: [[i32; 2]; 8] = [
    [-1, 0],
    [-1, -1],
    [0, -1],
    [1, -1],
    [1, 0],
    [1, 1],
    [0, 1],
    [-1, 1],
];

fn direction_of(from: [i32; 2], to: [i32; 2]) -> usize {
    match [to[0] - from[0], to[1] - from[1]] {
        [-1, 0] => 0,
        [-1, -1] => 1,
        [0, -1] => 2,
        [1, -1] => 3,
        [1, 0] => 4,
        [1, 1] => 5,
        [0, 1] => 6,
        // the backtrack is always adjacent to the current pixel, so the
        // remaining case is [-1, 1]
        _ => 7,
    }
}

/// Find the external boundary of every 8-connected foreground component of a
/// binary mask.
///
/// Pixels with a non-zero value are foreground. Each returned contour is one
/// closed walk of a component's outer boundary, starting at the component's
/// first pixel in raster order. Boundaries of holes inside a component are
/// not reported.
pub fn find_external_contours(mask: &Image<u8, 1>) -> Vec<Vec<[i32; 2]>> {
    let width = mask.cols();
    let height = mask.rows();
    let data = mask.as_slice();

    // label components by linking east, south and the two lower diagonal
    // neighbors; the sweep visits every 8-adjacent pair exactly once
    let mut uf = UnionFind::new(data.len());
    for (idx, val) in data.iter().enumerate() {
        if *val == 0 {
            continue;
        }
        let x = idx % width;
        if x + 1 < width && data[idx + 1] != 0 {
            uf.union(idx, idx + 1);
        }
        if idx + width < data.len() {
            if data[idx + width] != 0 {
                uf.union(idx, idx + width);
            }
            if x + 1 < width && data[idx + width + 1] != 0 {
                uf.union(idx, idx + width + 1);
            }
            if x > 0 && data[idx + width - 1] != 0 {
                uf.union(idx, idx + width - 1);
            }
        }
    }

    let mut contours = Vec::new();
    let mut seen = HashSet::new();
    for (idx, val) in data.iter().enumerate() {
        if *val == 0 {
            continue;
        }
        let root = uf.find(idx);
        if seen.insert(root) {
            let start = [(idx % width) as i32, (idx / width) as i32];
            contours.push(trace_boundary(data, width, height, start));
        }
    }
    contours
}

/// Moore neighbor tracing around one component, starting at its raster-first
/// pixel. The walk ends when it re-enters the start pixel with a backtrack
/// cell already used there, which closes exactly one loop of the outer
/// boundary; anything walked before that loop is discarded.
fn trace_boundary(data: &[u8], width: usize, height: usize, start: [i32; 2]) -> Vec<[i32; 2]> {
    let is_foreground = |p: [i32; 2]| {
        p[0] >= 0
            && p[1] >= 0
            && (p[0] as usize) < width
            && (p[1] as usize) < height
            && data[p[1] as usize * width + p[0] as usize] != 0
    };

    let mut contour: Vec<[i32; 2]> = Vec::new();
    let mut current = start;
    // the cell west of the raster-first pixel is always background
    let mut backtrack = [start[0] - 1, start[1]];
    let mut entries: Vec<([i32; 2], usize)> = Vec::new();

    // each pixel admits at most eight (pixel, backtrack) states, so the walk
    // repeats one within this bound
    let max_steps = 8 * width * height + 8;
    for _ in 0..max_steps {
        if current == start {
            if let Some(&(_, first)) = entries.iter().find(|(b, _)| *b == backtrack) {
                contour.drain(..first);
                return contour;
            }
            entries.push((backtrack, contour.len()));
        }
        contour.push(current);

        let from = direction_of(current, backtrack);
        let mut advanced = false;
        for step in 1..=8 {
            let dir = (from + step) % 8;
            let next = [current[0] + MOORE[dir][0], current[1] + MOORE[dir][1]];
            if is_foreground(next) {
                let prev = (from + step - 1) % 8;
                backtrack = [current[0] + MOORE[prev][0], current[1] + MOORE[prev][1]];
                current = next;
                advanced = true;
                break;
            }
        }
        if !advanced {
            // isolated pixel
            return contour;
        }
    }
    contour
}

#[cfg(test)]
mod tests {
    use cammatch_image::{Image, ImageError, ImageSize};

    fn mask(width: usize, height: usize, data: Vec<u8>) -> Result<Image<u8, 1>, ImageError> {
        Image::new(ImageSize { width, height }, data)
    }

    #[test]
    fn empty_mask_has_no_contours() -> Result<(), ImageError> {
        let mask = mask(4, 3, vec![0; 12])?;
        assert!(super::find_external_contours(&mask).is_empty());
        Ok(())
    }

    #[test]
    fn single_pixel() -> Result<(), ImageError> {
        let mut data = vec![0u8; 5 * 4];
        data[2 * 5 + 3] = 255;
        let mask = mask(5, 4, data)?;

        let contours = super::find_external_contours(&mask);
        assert_eq!(contours.len(), 1);
        assert_eq!(contours[0], vec![[3, 2]]);
        Ok(())
    }

    #[test]
    fn filled_square_yields_perimeter() -> Result<(), ImageError> {
        #[rustfmt::skip]
        let mask = mask(5, 5, vec![
            0,   0,   0,   0, 0,
            0, 255, 255, 255, 0,
            0, 255, 255, 255, 0,
            0, 255, 255, 255, 0,
            0,   0,   0,   0, 0,
        ])?;

        let contours = super::find_external_contours(&mask);
        assert_eq!(contours.len(), 1);
        assert_eq!(
            contours[0],
            vec![
                [1, 1],
                [2, 1],
                [3, 1],
                [3, 2],
                [3, 3],
                [2, 3],
                [1, 3],
                [1, 2],
            ]
        );
        Ok(())
    }

    #[test]
    fn diagonal_pair_is_one_component() -> Result<(), ImageError> {
        #[rustfmt::skip]
        let mask = mask(3, 3, vec![
            255,   0, 0,
              0, 255, 0,
              0,   0, 0,
        ])?;

        let contours = super::find_external_contours(&mask);
        assert_eq!(contours.len(), 1);
        assert_eq!(contours[0], vec![[0, 0], [1, 1]]);
        Ok(())
    }

    #[test]
    fn separate_blobs_yield_separate_contours() -> Result<(), ImageError> {
        #[rustfmt::skip]
        let mask = mask(5, 3, vec![
            255, 0, 0, 0, 255,
            255, 0, 0, 0, 255,
              0, 0, 0, 0,   0,
        ])?;

        let contours = super::find_external_contours(&mask);
        assert_eq!(contours.len(), 2);
        assert_eq!(contours[0], vec![[0, 0], [0, 1]]);
        assert_eq!(contours[1], vec![[4, 0], [4, 1]]);
        Ok(())
    }

    #[test]
    fn hole_boundary_is_not_reported() -> Result<(), ImageError> {
        #[rustfmt::skip]
        let mask = mask(5, 5, vec![
            255, 255, 255, 255, 255,
            255, 255, 255, 255, 255,
            255, 255,   0, 255, 255,
            255, 255, 255, 255, 255,
            255, 255, 255, 255, 255,
        ])?;

        let contours = super::find_external_contours(&mask);
        assert_eq!(contours.len(), 1);
        assert_eq!(contours[0].len(), 16);
        // the ring around the hole belongs to the inner boundary only
        for p in [[2, 1], [1, 2], [3, 2], [2, 3]] {
            assert!(!contours[0].contains(&p));
        }
        Ok(())
    }

    #[test]
    fn contour_starts_at_raster_first_pixel() -> Result<(), ImageError> {
        #[rustfmt::skip]
        let mask = mask(4, 4, vec![
            0,   0,   0, 0,
            0,   0, 255, 0,
            0, 255, 255, 0,
            0,   0,   0, 0,
        ])?;

        let contours = super::find_external_contours(&mask);
        assert_eq!(contours.len(), 1);
        assert_eq!(contours[0][0], [2, 1]);
        Ok(())
    }
}
