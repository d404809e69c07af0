//! Paced output of a render.

use cadenza_renderer::{Render, WriteError};
use futures::StreamExt;
use std::time::Duration;
use tokio::io::{AsyncWrite, AsyncWriteExt};

/// Writes each fragment of `render` to `out`, flushing after every fragment
/// and sleeping for `delay` before pulling the next one.
///
/// Returns the number of bytes written. On a render error the fragments
/// already written stay written and the error is returned.
pub async fn drive<W>(render: Render, out: &mut W, delay: Duration) -> Result<usize, WriteError>
where
	W: AsyncWrite + Unpin,
{
	let mut fragments = render.into_stream();
	let mut written = 0;

	while let Some(fragment) = fragments.next().await {
		let fragment = fragment?;
		out.write_all(fragment.as_bytes()).await?;
		out.flush().await?;
		written += fragment.len();

		if !delay.is_zero() {
			tokio::time::sleep(delay).await;
		}
	}

	tracing::debug!(bytes = written, "render complete");
	Ok(written)
}
