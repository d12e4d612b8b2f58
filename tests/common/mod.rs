//! Mock Tooling API server and log capture shared by the integration tests.

#![allow(dead_code)]

use std::{
    io::{self, Write},
    path::Path,
    sync::{Arc, Mutex},
};

use openapi_spec::{config::Config, tooling::ToolingClient};
use tracing_subscriber::fmt::MakeWriter;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const EXECUTE_PATH: &str = "/services/data/v62.0/tooling/executeAnonymous";
pub const TOKEN: &str = "00Dtest!token";

pub struct MockOrg {
    server: MockServer,
}

impl MockOrg {
    pub async fn start() -> Self {
        Self { server: MockServer::start().await }
    }

    pub fn client(&self) -> ToolingClient {
        let mut cfg = Config::load_from(Path::new("/nonexistent/.openapispecrc"));
        cfg.set("SF_INSTANCE_URL", self.server.uri());
        cfg.set("SF_ACCESS_TOKEN", TOKEN);
        cfg.set("REQUEST_TIMEOUT", "5");
        ToolingClient::from_config(&cfg).expect("client")
    }

    /// Answers the parseClasses call with `status` and a raw body.
    pub async fn respond(&self, status: u16, body: &str) {
        Mock::given(method("GET"))
            .and(path(EXECUTE_PATH))
            .and(query_param("anonymousBody", "OpenAPIParser.parseClasses();"))
            .and(header("authorization", format!("Bearer {TOKEN}").as_str()))
            .respond_with(
                ResponseTemplate::new(status)
                    .insert_header("content-type", "application/json")
                    .set_body_string(body),
            )
            .expect(1)
            .mount(&self.server)
            .await;
    }
}

#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    /// Scopes an info-level subscriber writing into this buffer to the current thread.
    pub fn capture(&self) -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::INFO)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }
}

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
