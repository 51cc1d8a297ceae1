//! Field-by-field translation between the HTTP schema and the RPC schema.
//!
//! This is the whole observable behavior of the gateway: a deterministic 1:1
//! copy in each direction. No semantic validation happens here; ranges like
//! negative cursors are the remote service's business, signaled back through
//! the response envelope.

use crate::http::types;
use crate::rpc::proto;

/// Build the RPC send request from a parsed HTTP body.
///
/// The RPC schema nests chat/text/sender under `message`; the HTTP schema
/// keeps them flat. That asymmetry is the remote service's contract.
pub fn send_to_rpc(req: types::SendRequest) -> proto::SendRequest {
    proto::SendRequest {
        message: Some(proto::Message {
            chat: req.chat,
            text: req.text,
            sender: req.sender,
            // Assigned by the remote service at store time.
            send_time: 0,
        }),
    }
}

/// Build the RPC pull request from parsed query parameters.
///
/// All four fields are copied verbatim; `reverse` stays optional so an
/// absent parameter and an explicit `false` reach the wire differently.
pub fn pull_to_rpc(query: types::PullQuery) -> proto::PullRequest {
    proto::PullRequest {
        chat: query.chat,
        cursor: query.cursor,
        limit: query.limit,
        reverse: query.reverse,
    }
}

/// Map the RPC payload to the HTTP response array, preserving order.
pub fn messages_from_rpc(messages: Vec<proto::Message>) -> Vec<types::Message> {
    messages
        .into_iter()
        .map(|msg| types::Message {
            chat: msg.chat,
            text: msg.text,
            sender: msg.sender,
            send_time: msg.send_time,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_nests_fields_under_message() {
        let rpc = send_to_rpc(types::SendRequest {
            chat: "c1".into(),
            text: "hi".into(),
            sender: "u1".into(),
        });

        let message = rpc.message.expect("message must be present");
        assert_eq!(message.chat, "c1");
        assert_eq!(message.text, "hi");
        assert_eq!(message.sender, "u1");
    }

    #[test]
    fn pull_copies_fields_verbatim() {
        let rpc = pull_to_rpc(types::PullQuery {
            chat: "c1".into(),
            cursor: 42,
            limit: 10,
            reverse: Some(true),
        });

        assert_eq!(rpc.chat, "c1");
        assert_eq!(rpc.cursor, 42);
        assert_eq!(rpc.limit, 10);
        assert_eq!(rpc.reverse, Some(true));
    }

    #[test]
    fn pull_keeps_absent_reverse_distinct_from_false() {
        let absent = pull_to_rpc(types::PullQuery {
            chat: "c1".into(),
            cursor: 0,
            limit: 1,
            reverse: None,
        });
        let explicit = pull_to_rpc(types::PullQuery {
            chat: "c1".into(),
            cursor: 0,
            limit: 1,
            reverse: Some(false),
        });

        assert_eq!(absent.reverse, None);
        assert_eq!(explicit.reverse, Some(false));
        assert_ne!(absent.reverse, explicit.reverse);
    }

    #[test]
    fn messages_map_field_for_field_in_order() {
        let mapped = messages_from_rpc(vec![
            proto::Message {
                chat: "c1".into(),
                text: "first".into(),
                sender: "u1".into(),
                send_time: 100,
            },
            proto::Message {
                chat: "c1".into(),
                text: "second".into(),
                sender: "u2".into(),
                send_time: 200,
            },
        ]);

        assert_eq!(mapped.len(), 2);
        assert_eq!(mapped[0].text, "first");
        assert_eq!(mapped[0].send_time, 100);
        assert_eq!(mapped[1].sender, "u2");
        assert_eq!(mapped[1].send_time, 200);
    }

    #[test]
    fn empty_payload_maps_to_empty_array() {
        assert!(messages_from_rpc(Vec::new()).is_empty());
    }
}
