// Test: the log! family accepts plain and formatted messages

use privlog::{Level, Logger, Metadata, WriterSink};

fn main() {
    let logger = Logger::new("ui", WriterSink::new(std::io::sink()));
    let user = "bob";
    let extra = Metadata::new();

    privlog::trace!(logger, "plain");
    privlog::debug!(logger, "user {user}");
    privlog::info!(logger, "{} items", 3_usize => public);
    privlog::notice!(logger, "{name}", name = "n" => private(hash));
    privlog::warning!(logger, "w");
    privlog::error!(logger, "e {}", 1.0_f64 => { public, format = fixed(1) });
    privlog::critical!(logger, "c");
    privlog::log!(logger, Level::Info, "dynamic level");
    privlog::log!(logger, Level::Info, metadata = &extra; "with metadata");
}
