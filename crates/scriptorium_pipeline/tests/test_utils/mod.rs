//! Mock drivers shared by the pipeline tests.

#![allow(dead_code)]

use async_trait::async_trait;
use scriptorium_core::{CompletionRequest, CompletionResponse};
use scriptorium_error::{
    GenerationError, GenerationErrorKind, ImageError, ImageErrorKind, ScriptoriumResult,
};
use scriptorium_interface::{ImageDriver, TextDriver};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::time::Instant;

/// Scripted reply for one call.
#[derive(Debug, Clone)]
pub enum Reply {
    Text(String),
    RateLimited,
    Upstream(u16),
}

/// A long chapter body that passes the default threshold.
pub fn long_text(seed: &str) -> String {
    format!("{} {}", seed, "word ".repeat(600))
}

/// A body below the default threshold.
pub fn short_text() -> String {
    "too short".to_string()
}

/// Text driver that plays a script, then falls back to canned replies.
///
/// Canned replies: title prompts get a preamble and a title, cover prompts
/// get a short description, everything else echoes the prompt padded past
/// the word threshold.
#[derive(Clone, Default)]
pub struct MockTextDriver {
    script: Arc<Mutex<VecDeque<Reply>>>,
    pub call_count: Arc<Mutex<usize>>,
    pub requests: Arc<Mutex<Vec<CompletionRequest>>>,
    pub call_times: Arc<Mutex<Vec<Instant>>>,
}

impl MockTextDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_script(replies: Vec<Reply>) -> Self {
        let driver = Self::default();
        *driver.script.lock().unwrap() = replies.into();
        driver
    }

    pub fn calls(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.prompt().clone())
            .collect()
    }

    fn canned(prompt: &str) -> String {
        if prompt.starts_with("Here is the plot") {
            "Here is a title:\nThe Last Ember".to_string()
        } else if prompt.starts_with("Plot:") {
            "A lighthouse under a green aurora, painted in thick oils.".to_string()
        } else {
            long_text(prompt)
        }
    }
}

#[async_trait]
impl TextDriver for MockTextDriver {
    async fn complete(&self, req: &CompletionRequest) -> ScriptoriumResult<CompletionResponse> {
        *self.call_count.lock().unwrap() += 1;
        self.requests.lock().unwrap().push(req.clone());
        self.call_times.lock().unwrap().push(Instant::now());

        let reply = self.script.lock().unwrap().pop_front();
        match reply {
            Some(Reply::Text(text)) => Ok(CompletionResponse::new(text)),
            Some(Reply::RateLimited) => Err(GenerationError::new(
                GenerationErrorKind::RateLimited("slow down".to_string()),
            )
            .into()),
            Some(Reply::Upstream(status)) => Err(GenerationError::new(
                GenerationErrorKind::Upstream {
                    status,
                    message: "upstream failure".to_string(),
                },
            )
            .into()),
            None => Ok(CompletionResponse::new(Self::canned(req.prompt()))),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

/// Image driver returning fixed bytes or failing.
#[derive(Clone)]
pub struct MockImageDriver {
    pub result: Option<Vec<u8>>,
    pub call_count: Arc<Mutex<usize>>,
}

impl MockImageDriver {
    pub fn returning(bytes: Vec<u8>) -> Self {
        Self {
            result: Some(bytes),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn failing() -> Self {
        Self {
            result: None,
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

#[async_trait]
impl ImageDriver for MockImageDriver {
    async fn generate_image(&self, _prompt: &str) -> ScriptoriumResult<Vec<u8>> {
        *self.call_count.lock().unwrap() += 1;
        match &self.result {
            Some(bytes) => Ok(bytes.clone()),
            None => Err(ImageError::new(ImageErrorKind::Upstream {
                status: 500,
                message: "image backend down".to_string(),
            })
            .into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock-image"
    }
}

/// Minimal PNG header the document assembler can size.
pub fn fake_png() -> Vec<u8> {
    let mut bytes = vec![0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];
    bytes.extend_from_slice(&13u32.to_be_bytes());
    bytes.extend_from_slice(b"IHDR");
    bytes.extend_from_slice(&512u32.to_be_bytes());
    bytes.extend_from_slice(&768u32.to_be_bytes());
    bytes.extend_from_slice(&[8, 6, 0, 0, 0, 0, 0, 0, 0]);
    bytes
}
