fn main() -> Result<(), Box<dyn std::error::Error>> {
    hdr_gradient::entry::run_app()
}
