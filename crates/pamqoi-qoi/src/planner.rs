/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::ops::Range;

/// Split `height` rows into contiguous row ranges, one per worker.
///
/// The ranges are ordered, do not overlap and together cover `0..height`.
/// The first range absorbs the rows left over after dividing `height`
/// between the workers, every other range has the same length.
///
/// Fewer ranges than `workers` are returned for short images, every
/// range in a multi-range plan spans at least two rows. With less than
/// two workers the whole image is a single range.
///
/// # Example
/// ```
/// use pamqoi_qoi::plan_chunks;
///
/// assert_eq!(plan_chunks(10, 3), vec![0..4, 4..7, 7..10]);
/// assert_eq!(plan_chunks(10, 1), vec![0..10]);
/// ```
pub fn plan_chunks(height: usize, workers: usize) -> Vec<Range<usize>> {
    if workers < 2 {
        return vec![0..height];
    }
    // A range ending one row short of the image also writes the end marker,
    // so no range may be a single row unless it is the only one.
    let workers = workers.min(height / 2).max(1);

    let lines_per_pack = (height / workers).max(1);
    let lines_first_pack = height - (workers - 1) * lines_per_pack;

    let mut ranges = Vec::with_capacity(workers);

    let mut start_y = 0;
    let mut end_y = lines_first_pack;

    while start_y < height {
        ranges.push(start_y..end_y);
        start_y = end_y;
        end_y += lines_per_pack;
    }
    if ranges.is_empty() {
        ranges.push(0..0);
    }
    ranges
}
