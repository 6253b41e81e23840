//! Helpers shared by the integration tests.

#![allow(dead_code)]

/// Installs a tracing subscriber configured via `RUST_LOG`.
///
/// Can be called from every test. Only the first call has an effect.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .without_time()
        .try_init()
        .ok();
}

/// Returns a question-only query for the name made of labels of the given
/// lengths.
pub fn long_name_query(label_lens: &[usize]) -> Vec<u8> {
    let mut res = b"\xbe\xef\x01\x00\x00\x01\x00\x00\x00\x00\x00\x00".to_vec();
    for (idx, &len) in label_lens.iter().enumerate() {
        res.push(len as u8);
        res.extend(std::iter::repeat(b'a' + idx as u8).take(len));
    }
    res.extend_from_slice(b"\x00\x00\x01\x00\x01");
    res
}
