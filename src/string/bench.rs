use test::Bencher;
extern crate test;
use super::*;
use std::sync::LazyLock;

const N: usize = 1000;

static CONTENT: LazyLock<Vec<u8>> = LazyLock::new(|| (0..N).map(|i| (i % 251) as u8).collect());

#[bench]
fn push_bytes(b: &mut Bencher) {
    b.iter(|| {
        let mut s = Twine::new();
        for &byte in CONTENT.iter() {
            s.try_push(byte).unwrap();
        }
        s
    });
}

#[bench]
fn append_chunks(b: &mut Bencher) {
    b.iter(|| {
        let mut s = Twine::new();
        for chunk in CONTENT.chunks(64) {
            s.try_append(chunk).unwrap();
        }
        s
    });
}

#[bench]
fn assign_into_warm_block(b: &mut Bencher) {
    let mut s = Twine::try_with_capacity(N).unwrap();
    b.iter(|| {
        s.try_assign(CONTENT.as_slice()).unwrap();
        s.len()
    });
}

#[bench]
fn clone_inline(b: &mut Bencher) {
    let s = Twine::try_from(b"twenty-three byte fill.").unwrap();
    b.iter(|| s.clone());
}

#[bench]
fn clone_heap(b: &mut Bencher) {
    let s = Twine::try_from(CONTENT.as_slice()).unwrap();
    b.iter(|| s.clone());
}
