use std::env;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let forced = ["U16", "U32", "U64"]
        .iter()
        .any(|width| env::var_os(format!("CARGO_FEATURE_{}", width)).is_some());
    if forced {
        return;
    }

    // `cfg(target_pointer_width)` in a build script is the host's, not the target's.
    match env::var("CARGO_CFG_TARGET_POINTER_WIDTH").as_deref() {
        Ok("16") => println!("cargo:rustc-cfg=feature=\"u16\""),
        Ok("32") => println!("cargo:rustc-cfg=feature=\"u32\""),
        _ => println!("cargo:rustc-cfg=feature=\"u64\""),
    }
}
