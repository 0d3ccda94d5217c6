use md5::Md5;
use sha1::Sha1;
use sha2::{Sha256, Sha512};

pub mod chunked;
pub mod driver;
pub mod format;
pub mod full;
pub mod logging;
pub mod mapped;
pub mod stats;
pub mod timer;
pub mod types;

use types::Strategy;

/// Files hashed when no paths are given on the command line. These are
/// the local model files the harness was written to size up.
pub const TEST_FILES: &[&str] = &[
    "/media/rhino/invokeai/models/sd-1/embedding/easynegative.safetensors", // 24.08 KB
    "/media/rhino/invokeai/models/sdxl/main/stable-diffusion-xl-base-1-0/vae/diffusion_pytorch_model.fp16.safetensors", // 159.58 MB
    "/media/rhino/invokeai/models/sd-1/main/stable-diffusion-v1-5-inpainting/safety_checker/model.fp16.safetensors", // 579.85 MB
    "/media/rhino/invokeai/models/core/convert/stable-diffusion-2-clip/text_encoder/model.safetensors", // 1.27 GB
    "/media/rhino/invokeai/models/sdxl/main/dreamshaperXL_v21TurboDPMSDE.safetensors", // 6.46 GB
];

/// Every registered strategy runs once per trial, in the order listed
/// here. Each entry hashes one file and returns the hex digest.
pub const STRATEGIES: &[Strategy] = &[
    Strategy {
        name: "SHA1_naive",
        description: "whole-file read, single-shot SHA1.",
        run: full::digest::<Sha1>,
    },
    Strategy {
        name: "SHA1_mv",
        description: "chunked read into a reusable buffer, incremental SHA1.",
        run: chunked::digest::<Sha1>,
    },
    Strategy {
        name: "SHA1_fast",
        description: "SHA1 of the first 64 KiB only; not a digest of the whole file.",
        run: chunked::digest_prefix::<Sha1>,
    },
    Strategy {
        name: "MD5_naive",
        description: "whole-file read, single-shot MD5.",
        run: full::digest::<Md5>,
    },
    Strategy {
        name: "MD5_mv",
        description: "chunked read into a reusable buffer, incremental MD5.",
        run: chunked::digest::<Md5>,
    },
    Strategy {
        name: "SHA256_naive",
        description: "whole-file read, single-shot SHA256.",
        run: full::digest::<Sha256>,
    },
    Strategy {
        name: "SHA256_mv",
        description: "chunked read into a reusable buffer, incremental SHA256.",
        run: chunked::digest::<Sha256>,
    },
    Strategy {
        name: "SHA512_naive",
        description: "whole-file read, single-shot SHA512.",
        run: full::digest::<Sha512>,
    },
    Strategy {
        name: "SHA512_mv",
        description: "chunked read into a reusable buffer, incremental SHA512.",
        run: chunked::digest::<Sha512>,
    },
    Strategy {
        name: "BLAKE3_mmap",
        description: "memory-mapped whole file, multithreaded BLAKE3.",
        run: mapped::digest_blake3,
    },
    Strategy {
        name: "BLAKE3_mv",
        description: "chunked read into a reusable buffer, multithreaded BLAKE3.",
        run: chunked::digest_blake3,
    },
];
