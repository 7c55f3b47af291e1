/*
 *     Copyright (C) 2023  Fritz Ochsmann
 *
 *     This program is free software: you can redistribute it and/or modify
 *     it under the terms of the GNU Affero General Public License as published
 *     by the Free Software Foundation, either version 3 of the License, or
 *     (at your option) any later version.
 *
 *     This program is distributed in the hope that it will be useful,
 *     but WITHOUT ANY WARRANTY; without even the implied warranty of
 *     MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *     GNU Affero General Public License for more details.
 *
 *     You should have received a copy of the GNU Affero General Public License
 *     along with this program.  If not, see <http://www.gnu.org/licenses/>.
 */

use crate::prelude::*;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

#[derive(Deserialize, Debug, Clone, PartialEq, Getters)]
pub struct Config {
    /// the address the http server binds to
    #[serde(default = "default_host")]
    host: IpAddr,
    #[serde(default = "default_port")]
    port: u16,
    /// the directory holding `todos.json`
    #[serde(default = "default_data_dir")]
    #[get = "pub"]
    data_dir: PathBuf,
}

impl Config {
    /// Read the configuration from the environment, after loading a `.env` file if present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(envy::from_env::<Config>()?)
    }

    pub fn address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

fn default_port() -> u16 {
    5000
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() -> Result<()> {
        let config = envy::from_iter::<_, Config>(Vec::<(String, String)>::new())?;

        assert_eq!(config.address(), SocketAddr::from(([0, 0, 0, 0], 5000)));
        assert_eq!(config.data_dir(), &PathBuf::from("data"));

        Ok(())
    }

    #[test]
    fn test_overrides() -> Result<()> {
        let config = envy::from_iter::<_, Config>(vec![
            ("HOST".to_owned(), "127.0.0.1".to_owned()),
            ("PORT".to_owned(), "8080".to_owned()),
            ("DATA_DIR".to_owned(), "/var/lib/todos".to_owned()),
        ])?;

        assert_eq!(config.address(), SocketAddr::from(([127, 0, 0, 1], 8080)));
        assert_eq!(config.data_dir(), &PathBuf::from("/var/lib/todos"));

        Ok(())
    }

    #[test]
    fn test_invalid_port() {
        let config = envy::from_iter::<_, Config>(vec![("PORT".to_owned(), "port".to_owned())]);

        assert!(config.is_err());
    }
}
