use crate::{
    error::{Result, SequenceError},
    orderer::Orderer,
    source::{count_and_restart, Restartable},
};

/// Reads the whole source into a buffer and sorts it.
///
/// The source is read twice: once to learn how large the buffer
/// has to be, and once more after rewinding it to fill the buffer.
pub(crate) fn sort_source<R, O>(mut source: R, orderer: &O) -> Result<Vec<R::Item>>
where
    R: Restartable,
    O: Orderer<R::Item>,
{
    let count = count_and_restart(&mut source)?;

    let mut buffer = Vec::with_capacity(count);
    buffer.extend(source.by_ref().take(count));
    if buffer.len() != count {
        return Err(SequenceError::SourceChanged {
            expected: count,
            found: buffer.len(),
        });
    }
    // the source still has items left, so it grew between the passes.
    if source.next().is_some() {
        return Err(SequenceError::SourceChanged {
            expected: count,
            found: count + 1 + source.count(),
        });
    }

    bubble_sort(orderer, &mut buffer);
    Ok(buffer)
}

/// Sorts the buffer in place by swapping adjacent pairs.
///
/// Every one of the `len - 1` passes walks the whole buffer.
/// A pair is only swapped if the orderer considers it strictly out of order,
/// so equal elements keep their relative position.
pub(crate) fn bubble_sort<T>(orderer: &impl Orderer<T>, buffer: &mut [T]) {
    let len = buffer.len();
    if len < 2 {
        return;
    }

    let mut swaps = 0usize;
    for _ in 0..len - 1 {
        for j in 0..len - 1 {
            if orderer.compare(&buffer[j], &buffer[j + 1]).is_gt() {
                buffer.swap(j, j + 1);
                swaps += 1;
            }
        }
    }
    crate::logging::trace!("sorted {} element(s) with {} swap(s)", len, swaps);
}
