use sumlink::SumSession;
use sumlink_frame::FrameConfig;
use sumlink_transport::ListenSocket;

use crate::cmd::AddArgs;
use crate::exit::{frame_error, transport_error, CliResult, SUCCESS};
use crate::output::{print_sum, OutputFormat};

pub fn run(args: AddArgs, format: OutputFormat) -> CliResult<i32> {
    let stream =
        ListenSocket::connect(&args.path).map_err(|err| transport_error("connect failed", err))?;
    let mut session = SumSession::over(stream, &FrameConfig::default())
        .map_err(|err| frame_error("session setup failed", err))?;

    let sum = session
        .request_sum(args.one, args.two)
        .map_err(|err| frame_error("request failed", err))?;

    print_sum(args.one, args.two, sum, format);
    Ok(SUCCESS)
}
