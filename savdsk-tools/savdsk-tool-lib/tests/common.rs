#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

/// A scratch directory unique to one test.
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("savdsk-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    return dir;
}

pub fn patterned_image() -> Vec<u8> {
    return (0..737_280usize).map(|i| ((i / 512) as u8) ^ (i as u8)).collect();
}
