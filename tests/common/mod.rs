//! A scripted stand-in for the hub's command port.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;
use yeelight_hub_rs::{ClientConfig, Hub, TransportConfig};

/// Accepts one connection per scripted reply, records the command line it
/// receives and answers with the reply. `None` holds the connection open
/// without answering. Once the script is used up the port is closed.
pub struct FakeHub {
    pub port: u16,
    received: Arc<Mutex<Vec<String>>>,
}

impl FakeHub {
    pub async fn start(script: Vec<Option<&'static str>>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let received = Arc::new(Mutex::new(Vec::new()));
        let log = received.clone();

        tokio::spawn(async move {
            for reply in script {
                let (stream, _) = listener.accept().await.unwrap();
                let mut reader = BufReader::new(stream);
                let mut line = String::new();
                reader.read_line(&mut line).await.unwrap();
                log.lock().unwrap().push(line);

                match reply {
                    Some(reply) => {
                        reader.get_mut().write_all(reply.as_bytes()).await.unwrap();
                    }
                    None => {
                        tokio::spawn(async move {
                            tokio::time::sleep(Duration::from_secs(5)).await;
                            drop(reader);
                        });
                    }
                }
            }
        });

        FakeHub { port, received }
    }

    /// Answers every command in order.
    pub async fn replying(replies: &[&'static str]) -> Self {
        Self::start(replies.iter().copied().map(Some).collect()).await
    }

    pub fn config(&self) -> ClientConfig {
        ClientConfig {
            port: self.port,
            transport: TransportConfig {
                connect_timeout: Duration::from_millis(500),
                read_timeout: Duration::from_millis(500),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    pub fn hub(&self) -> Hub {
        Hub::with_config("127.0.0.1", self.config())
    }

    pub fn received(&self) -> Vec<String> {
        self.received.lock().unwrap().clone()
    }
}

pub const TWO_LIGHTS: &str = "GLB 3CB8,1,1,80,255,0,0,100,0;50F5,1,0,60,0,255,0,0,0;\r\n";
