use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::process::{Command, Output};
use std::thread::JoinHandle;

use tempfile::TempDir;

#[allow(dead_code)]
pub fn run_momgen(args: &[&str]) -> Output {
    TestEnv::new().run(args)
}

pub struct TestEnv {
    home: TempDir,
    config: TempDir,
    data: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            home: tempfile::tempdir().expect("create temporary HOME dir"),
            config: tempfile::tempdir().expect("create temporary XDG config dir"),
            data: tempfile::tempdir().expect("create temporary XDG data dir"),
        }
    }

    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_momgen"))
            .args(args)
            .env("HOME", self.home.path())
            .env("XDG_CONFIG_HOME", self.config.path())
            .env("XDG_DATA_HOME", self.data.path())
            .env_remove("OPENAI_API_KEY")
            .env_remove("EMAIL_ADDRESS")
            .env_remove("EMAIL_PASSWORD")
            .env_remove("RUST_LOG")
            .output()
            .expect("failed to execute momgen binary")
    }

    #[allow(dead_code)]
    pub fn config_path(&self) -> PathBuf {
        let output = self.run(&["config", "path"]);
        assert!(
            output.status.success(),
            "config path should succeed\nstdout:\n{}\nstderr:\n{}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        );

        let path = String::from_utf8_lossy(&output.stdout);
        PathBuf::from(path.trim())
    }

    #[allow(dead_code)]
    pub fn write_config(&self, contents: &str) {
        let config_path = self.config_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).expect("create config parent directory");
        }
        std::fs::write(&config_path, contents).expect("write config file");
    }

    #[allow(dead_code)]
    pub fn write_notes(&self, contents: &str) -> PathBuf {
        let path = self.data.path().join("notes.txt");
        std::fs::write(&path, contents).expect("write notes file");
        path
    }
}

/// A chat-completions stand-in that answers a single request.
#[allow(dead_code)]
pub struct FakeCompletionServer {
    pub endpoint: String,
    handle: JoinHandle<String>,
}

#[allow(dead_code)]
impl FakeCompletionServer {
    pub fn start(status: &'static str, body: String) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind fake server");
        let endpoint = format!("http://{}/v1", listener.local_addr().unwrap());

        let handle = std::thread::spawn(move || {
            let (mut socket, _) = listener.accept().expect("accept request");
            let request = read_request(&mut socket);

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket
                .write_all(response.as_bytes())
                .expect("write response");
            request
        });

        Self { endpoint, handle }
    }

    /// The raw HTTP request that was received
    pub fn request(self) -> String {
        self.handle.join().expect("fake server thread")
    }
}

/// JSON body of a successful chat completion carrying `content`.
#[allow(dead_code)]
pub fn completion_body(content: &str) -> String {
    serde_json::json!({
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content }
        }]
    })
    .to_string()
}

#[allow(dead_code)]
fn read_request(socket: &mut std::net::TcpStream) -> String {
    let mut raw = Vec::new();
    let mut buf = [0u8; 4096];
    loop {
        let n = socket.read(&mut buf).expect("read request");
        if n == 0 {
            break;
        }
        raw.extend_from_slice(&buf[..n]);

        let text = String::from_utf8_lossy(&raw);
        if let Some(header_end) = text.find("\r\n\r\n") {
            let content_length = text[..header_end]
                .lines()
                .filter_map(|line| line.split_once(':'))
                .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
                .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if raw.len() >= header_end + 4 + content_length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&raw).into_owned()
}
