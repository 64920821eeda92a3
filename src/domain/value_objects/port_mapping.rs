//! PortMapping value object - host port published to a container port

use crate::error::DeployError;

/// `host:container` port publication for the service instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PortMapping {
    host: u16,
    container: u16,
}

impl PortMapping {
    pub fn new(host: u16, container: u16) -> Result<Self, DeployError> {
        if host == 0 {
            return Err(DeployError::InvalidConfig {
                key: "service.host_port".to_string(),
                message: "port must be between 1 and 65535".to_string(),
            });
        }
        if container == 0 {
            return Err(DeployError::InvalidConfig {
                key: "service.container_port".to_string(),
                message: "port must be between 1 and 65535".to_string(),
            });
        }
        Ok(Self { host, container })
    }

    pub fn host(&self) -> u16 {
        self.host
    }

    pub fn container(&self) -> u16 {
        self.container
    }

    /// Argument form accepted by `docker run -p`
    pub fn as_publish_arg(&self) -> String {
        format!("{}:{}", self.host, self.container)
    }
}

impl std::fmt::Display for PortMapping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.host, self.container)
    }
}
