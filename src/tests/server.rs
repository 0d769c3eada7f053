use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread::JoinHandle;

use crate::prelude::*;

/// Serve a single canned HTTP response on a random local port
///
/// Returns settings pointing to the server and a handle which
/// resolves to the received raw request, lowercased.
pub fn serve_once(status: u16, body: &'static str) -> (Settings, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();

    let settings = Settings {
        production_environment_url: format!("http://{}", listener.local_addr().unwrap()),
        ..Settings::default()
    };

    let handle = std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();

        let request = read_request(&mut stream);

        let response = format!(
            "HTTP/1.1 {status} Canned\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );

        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();

        request.to_lowercase()
    });

    (settings, handle)
}

fn read_request(stream: &mut TcpStream) -> String {
    let mut request = Vec::new();
    let mut buf = [0; 4096];

    loop {
        let read = stream.read(&mut buf).unwrap();

        if read == 0 {
            break;
        }

        request.extend_from_slice(&buf[..read]);

        let text = String::from_utf8_lossy(&request).to_string();

        if let Some(headers_end) = text.find("\r\n\r\n") {
            let content_length = text[..headers_end].lines()
                .filter_map(|line| line.split_once(':'))
                .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
                .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                .unwrap_or(0);

            if request.len() >= headers_end + 4 + content_length {
                break;
            }
        }
    }

    String::from_utf8_lossy(&request).to_string()
}
