use ureq::{Agent, AgentBuilder, Error::Status};

use super::{Fetcher, Response};

use std::io::Read;

pub struct UReqFetcher {
    agent: Agent,
}

impl Fetcher for UReqFetcher {
    fn fetch(&self, url: &str, headers: &[(&str, &str)]) -> Response {
        log::debug!("[FETCH] GET {}", url);

        let request = headers
            .iter()
            .fold(self.agent.request("GET", url), |request, (key, value)| {
                request.set(key, value)
            });

        let response = request.call();

        match response {
            Ok(response) if response.status() == 200 => {
                let body = response
                    .into_reader()
                    .bytes()
                    .collect::<Result<Vec<u8>, _>>();

                let Ok(body) = body else {
                    return Response::invalid_body();
                };

                Response::ok(body)
            }

            Ok(response) => Response::status(response.status()),

            Err(Status(code, _)) => Response::status(code),

            Err(err) => {
                log::debug!("[FETCH] transport error for {}: {}", url, err);
                Response::network_error()
            }
        }
    }
}

impl UReqFetcher {
    pub fn new() -> Self {
        UReqFetcher {
            agent: AgentBuilder::new().build(),
        }
    }
}

impl Default for UReqFetcher {
    fn default() -> Self {
        Self::new()
    }
}
