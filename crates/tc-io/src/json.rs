//! JSON request/response format.

use std::io::{Read, Write};

use crate::requests::RequestDocument;
use crate::system::TransitSystem;
use crate::IoResult;

/// Deserialize a [`RequestDocument`] from `reader`.
pub fn read_document<R: Read>(reader: R) -> IoResult<RequestDocument> {
    Ok(serde_json::from_reader(reader)?)
}

/// Read a document, answer its stat requests, and write the response array.
///
/// Returns the number of responses written.
pub fn process_json<R: Read, W: Write>(reader: R, mut writer: W, pretty: bool) -> IoResult<usize> {
    let doc = read_document(reader)?;
    let mut system = TransitSystem::build(&doc.base_requests, doc.routing_settings)?;
    let responses = system.answer_all(&doc.stat_requests);

    if pretty {
        serde_json::to_writer_pretty(&mut writer, &responses)?;
    } else {
        serde_json::to_writer(&mut writer, &responses)?;
    }
    writeln!(writer)?;
    Ok(responses.len())
}
