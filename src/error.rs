use std::fmt;

use crate::model::Channel;

#[derive(Debug, Clone, PartialEq)]
pub enum GradientError {
    CapacityExhausted {
        channel: Channel,
        capacity: usize,
    },
    IndexOutOfRange {
        channel: Channel,
        index: usize,
        len: usize,
    },
}

impl fmt::Display for GradientError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GradientError::CapacityExhausted { channel, capacity } => {
                write!(f, "{} channel is full ({} markers)", channel, capacity)
            }
            GradientError::IndexOutOfRange {
                channel,
                index,
                len,
            } => write!(
                f,
                "{} marker index {} out of range (len {})",
                channel, index, len
            ),
        }
    }
}

impl std::error::Error for GradientError {}

pub type Result<T> = std::result::Result<T, GradientError>;
