use std::env;

fn main() {
    #[cfg(target_os = "linux")]
    unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };

    pronpass::logging::init();

    let code = pronpass::cli::run(env::args_os().collect());
    std::process::exit(code);
}
