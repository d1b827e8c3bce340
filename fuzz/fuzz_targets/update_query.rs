#![no_main]
use libfuzzer_sys::fuzz_target;
use psum::{Error, FenwickTree, PrefixArray};

fuzz_target!(|data: (u16, Vec<(u16, i16)>)| {
    let (len_raw, ops) = data;
    let len = len_raw as usize % 1024;

    // Narrow slots overflow easily; the wide tree shadows every accepted delta.
    let mut narrow = FenwickTree::<i16>::new(len);
    let mut wide = FenwickTree::<i64>::new(len);
    let mut pa = PrefixArray::<i64>::new(len);

    // Indices may land past the end; all sides must reject them identically.
    for &(i, delta) in &ops {
        let i = i as usize % (len + 2);
        let pa_result = pa.update(i, i64::from(delta));

        match narrow.update(i, delta) {
            Ok(()) => {
                assert_eq!(wide.update(i, i64::from(delta)), Ok(()));
            }
            Err(Error::Overflow { index }) => {
                assert_eq!(index, i);
                // Undo the baseline copy so it tracks accepted deltas only.
                assert_eq!(pa.update(i, -i64::from(delta)), Ok(()));
            }
            Err(e) => {
                assert_eq!(pa_result, Err(e.clone()));
                assert_eq!(wide.update(i, i64::from(delta)), Err(e));
            }
        }

        assert_eq!(wide.query(i), pa.query(i));
        if let Ok(sum) = narrow.query(i) {
            assert_eq!(Ok(i64::from(sum)), wide.query(i));
        }
    }

    for k in 0..len {
        assert_eq!(wide.query(k), pa.query(k));
        if let Ok(sum) = narrow.query(k) {
            assert_eq!(Ok(i64::from(sum)), wide.query(k));
        }
    }
});
