#![no_main]
use libfuzzer_sys::fuzz_target;
use tombvec::TombVec;

fuzz_target!(|data: (u8, Vec<u16>)| {
    let (refresh, ops) = data;
    let mut vec = TombVec::with_refresh_threshold(refresh as usize % 32);
    let mut model: Vec<u16> = Vec::new();

    for op in ops {
        let push = op & 1 == 0;
        let payload = op >> 1;
        if push || model.is_empty() {
            vec.push(payload);
            model.push(payload);
        } else {
            let index = payload as usize % model.len();
            assert_eq!(vec.remove(index).unwrap(), model.remove(index));
        }

        assert_eq!(vec.len(), model.len());
        if let Some(last) = model.last() {
            assert_eq!(vec.get(model.len() - 1).unwrap(), last);
        }
    }

    for (i, expected) in model.iter().enumerate() {
        assert_eq!(vec.get(i).unwrap(), expected);
    }
});
