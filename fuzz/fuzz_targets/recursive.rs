#![no_main]

use libfuzzer_sys::fuzz_target;

use pivot_sort::recursive as test_sort;
use pivot_sort_fuzz::{check_sorted, u8_as_i16, u8_as_i16_narrow};

fuzz_target!(|data: &[u8]| {
    let v = u8_as_i16(data);
    // Sorted inputs recurse once per element.
    if v.len() > 2_048 {
        return;
    }

    check_sorted(&v, &test_sort::sort(v.clone()));

    let narrow = u8_as_i16_narrow(data);
    if narrow.len() <= 2_048 {
        check_sorted(&narrow, &test_sort::sort(narrow.clone()));
    }
});
