use reqwest::Body;
use reqwest::multipart::{Form, Part};
use tokio::sync::mpsc::UnboundedSender;

use crate::{
    core::{EntryId, VsmeClient, VsmeError, net},
    upload::{state::UploadEvent, wire::UploadReceipt},
};

/// Body chunk size; one progress event is emitted per chunk.
const CHUNK_SIZE: usize = 16 * 1024;

pub(super) fn mime_for(ext: &str) -> &'static str {
    match ext {
        "pdf" => "application/pdf",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        _ => "application/octet-stream",
    }
}

#[allow(clippy::cast_possible_truncation)]
fn percent(sent: usize, total: usize) -> u8 {
    if total == 0 {
        100
    } else {
        (sent.saturating_mul(100) / total).min(100) as u8
    }
}

/// `POST /upload/invoice` as a streamed multipart body.
///
/// Progress and `Sent` events are reported on `events` as the transport pulls chunks.
pub(super) async fn upload_invoice(
    client: &VsmeClient,
    id: EntryId,
    filename: &str,
    ext: &str,
    data: Vec<u8>,
    events: UnboundedSender<(EntryId, UploadEvent)>,
) -> Result<UploadReceipt, VsmeError> {
    let total = data.len();
    let chunks: Vec<Vec<u8>> = data.chunks(CHUNK_SIZE).map(<[u8]>::to_vec).collect();

    if chunks.is_empty() {
        let _ = events.send((id.clone(), UploadEvent::Sent));
    }

    let body_id = id.clone();
    let mut sent = 0usize;
    let stream = futures::stream::iter(chunks.into_iter().map(move |chunk| {
        sent += chunk.len();
        let _ = events.send((body_id.clone(), UploadEvent::Progress(percent(sent, total))));
        if sent >= total {
            let _ = events.send((body_id.clone(), UploadEvent::Sent));
        }
        Ok::<_, std::io::Error>(chunk)
    }));

    let part = Part::stream_with_length(Body::wrap_stream(stream), total as u64)
        .file_name(filename.to_string())
        .mime_str(mime_for(ext))?;
    let form = Form::new().part("file", part);

    let url = client.endpoint("upload/invoice")?;
    let resp = client
        .send_with_retry(client.http().post(url).multipart(form), None)
        .await?;
    net::get_json(resp, "upload_invoice", id.as_str()).await
}
