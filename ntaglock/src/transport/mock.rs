// ntaglock/src/transport/mock.rs

use std::collections::VecDeque;

use crate::transport::traits::TagTransport;
use crate::types::Uid;
use crate::{Error, Result};

/// Mock transport for unit tests. It records transceived frames and
/// returns scripted results in order.
#[derive(Debug, Default)]
pub struct MockTransport {
    /// Every frame passed to `transceive`, in order
    pub sent: Vec<Vec<u8>>,
    /// Scripted results; `Err(msg)` becomes `Error::Transport(msg)`
    pub responses: VecDeque<std::result::Result<Vec<u8>, String>>,
    pub uid: Vec<u8>,
    pub techs: Vec<String>,
    /// None makes `max_transceive_length` fail
    pub max_transceive: Option<usize>,
    /// Testing hook: `connect` fails while set
    pub fail_connect: bool,
    pub connect_calls: usize,
    pub close_calls: usize,
    connected: bool,
}

impl MockTransport {
    pub fn new(uid: &[u8]) -> Self {
        Self {
            uid: uid.to_vec(),
            techs: vec![
                "android.nfc.tech.NfcA".to_string(),
                "android.nfc.tech.MifareUltralight".to_string(),
                "android.nfc.tech.NdefFormatable".to_string(),
            ],
            max_transceive: Some(253),
            ..Default::default()
        }
    }

    /// Queue a successful response.
    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.responses.push_back(Ok(resp));
    }

    /// Queue a transceive failure.
    pub fn push_failure(&mut self, msg: &str) {
        self.responses.push_back(Err(msg.to_string()));
    }

    pub fn set_fail_connect(&mut self, fail: bool) {
        self.fail_connect = fail;
    }

    /// Frames whose opcode matches `opcode`.
    pub fn sent_with_opcode(&self, opcode: u8) -> Vec<&Vec<u8>> {
        self.sent
            .iter()
            .filter(|f| f.first() == Some(&opcode))
            .collect()
    }
}

impl TagTransport for MockTransport {
    fn uid(&self) -> Uid {
        Uid::from_bytes(&self.uid)
    }

    fn tech_list(&self) -> Vec<String> {
        self.techs.clone()
    }

    fn connect(&mut self) -> Result<()> {
        self.connect_calls += 1;
        if self.fail_connect {
            return Err(Error::Connection("tag out of range".into()));
        }
        self.connected = true;
        Ok(())
    }

    fn transceive(&mut self, frame: &[u8]) -> Result<Vec<u8>> {
        if !self.connected {
            return Err(Error::NotConnected);
        }
        self.sent.push(frame.to_vec());
        match self.responses.pop_front() {
            Some(Ok(resp)) => Ok(resp),
            Some(Err(msg)) => Err(Error::Transport(msg)),
            None => Err(Error::Timeout),
        }
    }

    fn max_transceive_length(&self) -> Result<usize> {
        if !self.connected {
            return Err(Error::NotConnected);
        }
        self.max_transceive
            .ok_or_else(|| Error::Transport("max transceive length unavailable".into()))
    }

    fn close(&mut self) -> Result<()> {
        self.close_calls += 1;
        self.connected = false;
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.connected
    }
}
