use mockito::{mock, Mock};

pub struct MockWebserver {
    _mock: Mock,
}

impl MockWebserver {
    pub fn from_xml(path: &str, xml: &str) -> Self {
        Self {
            _mock: mock("GET", path)
                .with_header("content-type", "application/xml")
                .with_body(xml)
                .create(),
        }
    }

    pub fn with_status(path: &str, status: usize) -> Self {
        Self {
            _mock: mock("GET", path).with_status(status).create(),
        }
    }

    pub fn webserver_root_url(&self) -> String {
        mockito::server_url()
    }
}
