use chrono::Local;
use crossbeam_channel::{unbounded, Sender};
use once_cell::sync::Lazy;
use std::{
    fmt,
    fs::{self, OpenOptions},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    thread,
};

static LOGGER: Lazy<Logger> = Lazy::new(|| Logger::new("default"));

#[derive(Debug, Copy, Clone)]
enum Level {
    Info,
    Error,
    Debug,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Info => write!(f, "Info"),
            Level::Error => write!(f, "Error"),
            Level::Debug => write!(f, "Debug"),
        }
    }
}

pub struct Logger {
    writer: Sender<(Level, String)>,
}

impl Logger {
    fn new(log_name: &str) -> Self {
        let log_path = Self::get_log_path(log_name).unwrap_or_else(|| {
            panic!("Failed to create log directory.");
        });
        let (tx, rx) = unbounded::<(Level, String)>();

        // 寫入檔案的操作使用另一個線程處理
        thread::spawn(move || {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .truncate(false)
                .open(log_path)
                .unwrap_or_else(|e| {
                    panic!("Failed to open log file: {}", e);
                });

            let mut writer = BufWriter::new(file);

            for (level, msg) in &rx {
                let line = format!("{} {} {}\n", Local::now().format("%F %X%.6f"), level, msg);

                if let Err(why) = writer.write_all(line.as_bytes()) {
                    error_console(format!(
                        "Failed to write to log file. because:{:#?}\r\nmsg:{}",
                        why, line
                    ));
                }

                if rx.is_empty() {
                    if let Err(why) = writer.flush() {
                        error_console(format!("Failed to flush log file. because:{:#?}", why));
                    }
                }
            }
        });

        Logger { writer: tx }
    }

    fn send(&self, level: Level, msg: String) {
        if let Err(why) = self.writer.send((level, msg)) {
            error_console(why.to_string());
        }
    }

    fn get_log_path(name: &str) -> Option<PathBuf> {
        let path = Path::new("log");

        if !path.exists() {
            fs::create_dir_all(path).ok()?;
        }

        let mut log_path = PathBuf::from(path);
        log_path.push(format!("{}_{}.log", Local::now().format("%Y-%m-%d"), name));

        Some(log_path)
    }
}

pub fn info_file_async(log: String) {
    LOGGER.send(Level::Info, log);
}

pub fn error_file_async(log: String) {
    LOGGER.send(Level::Error, log);
}

pub fn debug_file_async(log: String) {
    LOGGER.send(Level::Debug, log);
}

pub fn error_console(log: String) {
    println!(
        "{} Error {}",
        Local::now().format("%Y-%m-%d %H:%M:%S.%3f"),
        log
    );
}
