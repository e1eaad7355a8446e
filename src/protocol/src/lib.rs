pub mod pr_model;
use pr_model::PrModel;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProtocolError {
	#[error("codec error: {0}")]
	Codec(#[from] bincode::Error),
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub enum Message {
	Schedule(PrModel),
	Nop,
}

impl Message {
	pub fn to_bytes(&self) -> Result<Vec<u8>, ProtocolError> {
		Ok(bincode::serialize(&self)?)
	}

	pub fn from_bytes(bytes: &[u8]) -> Result<Self, ProtocolError> {
		Ok(bincode::deserialize(bytes)?)
	}
}
