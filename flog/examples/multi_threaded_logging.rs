use flog::{Level, Logger, logger_config};

fn main() {
    let path = "/tmp/flog_example.log";
    let _ = std::fs::remove_file(path);

    // main thread logs through the global logger and the log facade
    logger_config()
        .with_log_file(path)
        .with_level(Level::Info)
        .init_global();
    flog::info(&[&"Hello, world!"]);
    log::debug!("below the threshold, dropped");

    // threaded tasks log to their own files through explicit loggers
    let handles: Vec<_> = (0..5)
        .map(|i| {
            std::thread::spawn(move || {
                let logger = Logger::new(format!("/tmp/flog_thread_{i}.log"), Level::Debug);
                flog::warningf!(logger, "MESSAGE RECEIVED: thread {i}\nsecond line");
                flog::global().infof(format_args!("thread {i} done"));
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    for i in 0..5 {
        let content = std::fs::read_to_string(format!("/tmp/flog_thread_{i}.log")).unwrap();
        log::info!(
            "last line of /tmp/flog_thread_{i}.log is: {}",
            content.lines().last().unwrap()
        );
    }
    print!("{}", std::fs::read_to_string(path).unwrap());
}
