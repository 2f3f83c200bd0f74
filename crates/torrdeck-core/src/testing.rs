//! Recording control service shared by unit tests.

use std::sync::{Arc, Mutex};

use anyhow::bail;
use async_trait::async_trait;
use torrdeck_model::ControlService;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum RecordedCall {
    Pause(String),
    Resume(String),
    Remove { id: String, delete_files: bool },
    SetCategory { id: String, name: String },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Behaviour {
    #[default]
    Succeed,
    Fail,
    Panic,
}

#[derive(Debug, Default)]
pub(crate) struct StubService {
    behaviour: Behaviour,
    calls: Mutex<Vec<RecordedCall>>,
}

impl StubService {
    pub(crate) fn succeeding() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn failing() -> Arc<Self> {
        Arc::new(Self {
            behaviour: Behaviour::Fail,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub(crate) fn panicking() -> Arc<Self> {
        Arc::new(Self {
            behaviour: Behaviour::Panic,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub(crate) fn calls(&self) -> Vec<RecordedCall> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    fn record(&self, call: RecordedCall) -> anyhow::Result<()> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
        match self.behaviour {
            Behaviour::Succeed => Ok(()),
            Behaviour::Fail => bail!("stub service rejected the request"),
            Behaviour::Panic => panic!("stub service crashed mid-request"),
        }
    }
}

#[async_trait]
impl ControlService for StubService {
    async fn pause(&self, id: &str) -> anyhow::Result<()> {
        self.record(RecordedCall::Pause(id.into()))
    }

    async fn resume(&self, id: &str) -> anyhow::Result<()> {
        self.record(RecordedCall::Resume(id.into()))
    }

    async fn remove(&self, id: &str, delete_files: bool) -> anyhow::Result<()> {
        self.record(RecordedCall::Remove {
            id: id.into(),
            delete_files,
        })
    }

    async fn set_category(&self, id: &str, name: &str) -> anyhow::Result<()> {
        self.record(RecordedCall::SetCategory {
            id: id.into(),
            name: name.into(),
        })
    }
}
