use std::io::Write;

use itertools::Itertools;

use crate::{
    errors::as_io_error,
    heap::Heap,
    options::{DemoOptions, HeapOptions},
};

/// Write `values` in extraction order.
pub fn sort_values<W: Write>(
    out: &mut W,
    values: &[i64],
    options: &HeapOptions,
) -> std::io::Result<()> {
    log::info!("sorting {} values as a {}", values.len(), options.mode);
    let heap = Heap::from_slice(values, options.mode);
    writeln!(out, "{}", heap.into_sorted_vec().iter().join(" "))
}

/// Write the `k` most extreme of `values`.
pub fn top_k<W: Write>(
    out: &mut W,
    values: &[i64],
    k: usize,
    options: &HeapOptions,
) -> std::io::Result<()> {
    let mut heap = Heap::from_slice(values, options.mode);
    let mut res = Vec::with_capacity(k.min(heap.len()));
    while res.len() < k && !heap.is_empty() {
        res.push(heap.pop().map_err(as_io_error)?);
    }
    if res.len() < k {
        log::warn!("asked for {} values, only {} available", k, res.len());
    }
    writeln!(out, "{}", res.iter().join(" "))
}

pub fn demo<W: Write>(
    out: &mut W,
    demo: &DemoOptions,
    options: &HeapOptions,
) -> std::io::Result<()> {
    let mut heap = Heap::from_vec((0..demo.size).collect(), options.mode);
    writeln!(out, "{}", heap)?;
    writeln!(out, "length: {}", heap.len())?;
    writeln!(out, "top: {}", heap.top().map_err(as_io_error)?)?;

    for x in [15, 17] {
        log::info!("push: {}", x);
        heap.push(x);
        writeln!(out, "push: {}", x)?;
        writeln!(out, "length: {}", heap.len())?;
    }
    writeln!(out, "top: {}", heap.top().map_err(as_io_error)?)?;

    for _ in 0..2 {
        let x = heap.pop().map_err(as_io_error)?;
        log::info!("pop: {}", x);
        writeln!(out, "pop: {}", x)?;
        writeln!(out, "length: {}", heap.len())?;
    }

    let mode = heap.mode().flipped();
    log::info!("switching to {}", mode);
    heap.set_mode(mode);
    writeln!(out, "Set heap type: {}", mode)?;
    writeln!(out, "{}", heap)
}
