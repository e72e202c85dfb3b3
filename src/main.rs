fn main() -> std::process::ExitCode {
    nurture_glow_lib::run()
}
