#![no_main]

use libfuzzer_sys::fuzz_target;

use pivot_sort::work_stack as test_sort;
use pivot_sort_fuzz::{check_sorted, u8_as_i16, u8_as_i16_narrow};

fuzz_target!(|data: &[u8]| {
    let v = u8_as_i16(data);
    check_sorted(&v, &test_sort::sort(v.clone()));

    let narrow = u8_as_i16_narrow(data);
    check_sorted(&narrow, &test_sort::sort(narrow.clone()));

    let floats = v.iter().map(|val| f32::from(*val)).collect::<Vec<_>>();
    let sorted_floats = pivot_sort::partial::try_sort(floats).unwrap();
    assert!(sorted_floats.windows(2).all(|w| w[0] <= w[1]));
});
