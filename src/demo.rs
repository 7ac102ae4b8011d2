fn main() -> anyhow::Result<()> {
    bubble_trace::cli::run()
}
