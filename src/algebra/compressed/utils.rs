//---------------------------------------------------------
// low-level internal utilities for counting / filling entries
// of major axis pointer arrays.
//---------------------------------------------------------

// converts per-slot counts into starting offsets.   On exit
// ptr[k] is the sum of the original ptr[0..k], so that a
// trailing slot holding zero ends up holding the total count.
pub(crate) fn counts_to_pointers(ptr: &mut [usize]) {
    let mut currentptr = 0;
    for p in ptr.iter_mut() {
        let count = *p;
        *p = currentptr;
        currentptr += count;
    }
}

// after a fill pass that advanced every ptr[k] from the start of
// slice k to the start of slice k+1, shift everything back so that
// ptr[k] is once again the start of slice k.
pub(crate) fn backshift_pointers(ptr: &mut [usize]) {
    if ptr.is_empty() {
        return;
    }
    ptr.rotate_right(1);
    ptr[0] = 0;
}

#[test]
fn test_counts_to_pointers() {
    let mut ptr = vec![3, 0, 1, 2, 0];
    counts_to_pointers(&mut ptr);
    assert_eq!(ptr, vec![0, 3, 3, 4, 6]);

    let mut ptr = vec![0];
    counts_to_pointers(&mut ptr);
    assert_eq!(ptr, vec![0]);
}

#[test]
fn test_backshift_pointers() {
    // slices of length 3, 0, 1 after filling
    let mut ptr = vec![3, 3, 4, 4];
    backshift_pointers(&mut ptr);
    assert_eq!(ptr, vec![0, 3, 3, 4]);

    let mut ptr: Vec<usize> = vec![];
    backshift_pointers(&mut ptr);
    assert!(ptr.is_empty());
}
