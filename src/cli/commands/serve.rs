//! Serve command - local HTTP API
//!
//! One thread owns the session and answers requests one at a time, so all
//! mutations of the task sequence are serialized through this loop.

use tiny_http::Server;

use kanban_board::api::Session;

use super::Context;
use crate::server::tiny_http::handle_api_request;

/// Start the HTTP server and block
pub fn serve(ctx: &Context, port: Option<u16>) -> anyhow::Result<()> {
    let port = port.unwrap_or(ctx.config.server.port);
    let addr = format!("127.0.0.1:{port}");
    let server = Server::http(&addr).map_err(|e| anyhow::anyhow!("Failed to start server: {e}"))?;

    let mut session = Session::new(ctx.open_store()?);

    log::info!("serving slot '{}' on http://{addr}", session.store.key());
    println!("Serving the board on http://{addr}/api/board");
    println!("Press Ctrl+C to stop");

    for mut request in server.incoming_requests() {
        let response = handle_api_request(&mut session, &mut request);
        if let Err(e) = request.respond(response) {
            log::warn!("failed to send response: {e}");
        }
    }

    Ok(())
}
