// Webserver implementation

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::prelude::*;

/// Serves the router on the configured listen address.
/// Plain HTTP: the service is only ever bound to loopback for the local UI.
pub async fn run(app: App, router: Router) -> MdResult<()> {
	let router = router.layer(TraceLayer::new_for_http());

	let listener = TcpListener::bind(app.opts.listen.as_ref()).await?;
	info!("Listening on {}", app.opts.listen);

	axum::serve(listener, router).await?;
	Ok(())
}

// vim: ts=4
