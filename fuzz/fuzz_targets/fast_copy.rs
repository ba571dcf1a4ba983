#![no_main]

// The vectorised copy must behave like a plain copy for any length and alignment.

use libfuzzer_sys::fuzz_target;
use pica_texture_transcode::fast_copy::copy_with_fast_path;

fn scalar_copy(source: &[u8], dest: &mut [u8]) {
    dest.copy_from_slice(source);
}

fuzz_target!(|data: &[u8]| {
    let Some((&shift, data)) = data.split_first() else {
        return;
    };
    let shift = (shift % 16) as usize;

    let mut dest = vec![0u8; data.len() + shift];
    copy_with_fast_path(data, &mut dest[shift..], scalar_copy);
    assert_eq!(&dest[shift..], data);
    assert!(dest[..shift].iter().all(|&b| b == 0));
});
