#![cfg(unix)]

use std::os::unix::net::UnixStream;
use std::path::PathBuf;
use std::thread;

use sumlink::frame::{FrameConfig, FrameError, FrameWriter};
use sumlink::transport::{LinkStream, ListenSocket, TransportError};
use sumlink::SumSession;

fn pair_sessions() -> (SumSession, SumSession) {
    let (left, right) = UnixStream::pair().unwrap();
    let config = FrameConfig::default();
    let server = SumSession::over(LinkStream::from_unix(left), &config).unwrap();
    let client = SumSession::over(LinkStream::from_unix(right), &config).unwrap();
    (server, client)
}

#[test]
fn sums_over_socket_pair() {
    let (mut server, mut client) = pair_sessions();
    let handle = thread::spawn(move || server.serve());

    assert_eq!(client.request_sum(2, 3).unwrap(), 5);
    assert_eq!(client.request_sum(0, 0).unwrap(), 0);
    assert_eq!(client.request_sum(1, u64::MAX - 1).unwrap(), u64::MAX);
    drop(client);

    // Client hangup ends the session cleanly.
    handle.join().unwrap().unwrap();
}

#[test]
fn sum_wraps_on_overflow() {
    let (mut server, mut client) = pair_sessions();
    let handle = thread::spawn(move || server.serve());

    assert_eq!(client.request_sum(u64::MAX, 1).unwrap(), 0);
    drop(client);

    handle.join().unwrap().unwrap();
}

#[test]
fn undecodable_request_is_fatal() {
    let (left, right) = UnixStream::pair().unwrap();
    let config = FrameConfig::default();
    let mut server = SumSession::over(LinkStream::from_unix(left), &config).unwrap();
    let handle = thread::spawn(move || server.serve());

    // Field 1 with length-delimited wire type: not part of the schema.
    let mut writer =
        FrameWriter::with_config_link(LinkStream::from_unix(right), &config).unwrap();
    writer.send_payload(&[0x0a, 0x00]).unwrap();

    let err = handle.join().unwrap().unwrap_err();
    assert!(matches!(err, FrameError::Decode(_)));
}

#[test]
fn oversized_request_overflows_server_buffer() {
    let (left, right) = UnixStream::pair().unwrap();
    let config = FrameConfig {
        recv_capacity: 4,
        ..FrameConfig::default()
    };
    let mut server = SumSession::over(LinkStream::from_unix(left), &config).unwrap();
    let handle = thread::spawn(move || server.serve());

    let mut writer =
        FrameWriter::with_config_link(LinkStream::from_unix(right), &FrameConfig::default())
            .unwrap();
    writer.send_payload(&[0x11; 8]).unwrap();

    let err = handle.join().unwrap().unwrap_err();
    assert!(matches!(err, FrameError::BufferOverflow { capacity: 4 }));
}

#[test]
fn disconnect_mid_frame_is_fatal() {
    let (left, right) = UnixStream::pair().unwrap();
    let config = FrameConfig::default();
    let mut server = SumSession::over(LinkStream::from_unix(left), &config).unwrap();
    let handle = thread::spawn(move || server.serve());

    // Prefix promises four bytes; deliver one and hang up.
    use std::io::Write;
    let mut raw = right;
    raw.write_all(&[0x04, 0xAA]).unwrap();
    drop(raw);

    let err = handle.join().unwrap().unwrap_err();
    assert!(matches!(
        err,
        FrameError::Transport(TransportError::Disconnected)
    ));
}

#[test]
fn sums_over_listen_socket() {
    let dir = std::env::temp_dir().join(format!("sumlink-itest-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let sock_path: PathBuf = dir.join("sum.sock");

    let listener = ListenSocket::bind(&sock_path).unwrap();
    let server = thread::spawn(move || {
        let stream = listener.accept().unwrap();
        let mut session = SumSession::over(stream, &FrameConfig::default()).unwrap();
        session.serve()
    });

    let stream = ListenSocket::connect(&sock_path).unwrap();
    let mut client = SumSession::over(stream, &FrameConfig::default()).unwrap();
    assert_eq!(client.request_sum(40, 2).unwrap(), 42);
    drop(client);

    server.join().unwrap().unwrap();
    let _ = std::fs::remove_dir_all(&dir);
}
