#![no_main]

use libfuzzer_sys::fuzz_target;
use pamqoi_qoi::pamqoi_core::options::EncoderOptions;

fuzz_target!(|data: &[u8]| {
    if let Ok(image) = pamqoi_pam::PamDecoder::new(data).decode() {
        let options = EncoderOptions::default().set_num_threads(3);
        let encoded = pamqoi_qoi::QoiEncoder::new(&image, options)
            .encode_to_vec()
            .unwrap();

        pamqoi_qoi::inspect(&encoded).unwrap();
    }
});
