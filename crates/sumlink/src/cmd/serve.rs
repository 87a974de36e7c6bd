use sumlink::SumSession;
use sumlink_frame::FrameConfig;
use sumlink_transport::ListenSocket;
use tracing::info;

use crate::cmd::ServeArgs;
use crate::exit::{frame_error, transport_error, CliResult, SUCCESS};

pub fn run(args: ServeArgs) -> CliResult<i32> {
    let socket =
        ListenSocket::bind(&args.path).map_err(|err| transport_error("bind failed", err))?;
    let config = FrameConfig {
        recv_capacity: args.buffer,
        send_capacity: args.buffer,
        ..FrameConfig::default()
    };

    loop {
        let stream = socket
            .accept()
            .map_err(|err| transport_error("accept failed", err))?;
        let mut session = SumSession::over(stream, &config)
            .map_err(|err| frame_error("session setup failed", err))?;

        // A corrupt or overflowing session takes the whole server down.
        session
            .serve()
            .map_err(|err| frame_error("session failed", err))?;
        info!("session ended");

        if args.once {
            return Ok(SUCCESS);
        }
    }
}
