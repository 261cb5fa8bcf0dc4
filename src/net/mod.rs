//! UDP multicast transport for framed sentences.
//!
//! Chart plotters (OpenCPN and friends) listen on a multicast group for
//! NMEA traffic over the local network. The sender multicasts each sentence
//! as one datagram; the receiver joins the group and reads them back. The
//! plotter must be listening before sentences are sent - datagrams are not
//! queued anywhere.

use std::net::{Ipv4Addr, SocketAddrV4, UdpSocket};
use std::time::Duration;

use crate::error::Result;

/// Multicast sentence sender.
pub struct AisSender {
    socket: UdpSocket,
    dest: SocketAddrV4,
}

impl AisSender {
    /// Bind an ephemeral socket and set the multicast TTL.
    pub fn new(group: Ipv4Addr, port: u16, ttl: u32) -> Result<Self> {
        let socket = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0))?;
        socket.set_multicast_ttl_v4(ttl)?;
        Ok(Self {
            socket,
            dest: SocketAddrV4::new(group, port),
        })
    }

    pub fn destination(&self) -> SocketAddrV4 {
        self.dest
    }

    /// Send one framed sentence as a single datagram.
    pub fn send(&self, sentence: &str) -> Result<()> {
        self.socket.send_to(sentence.as_bytes(), self.dest)?;
        log::debug!("sent {} bytes to {}", sentence.len(), self.dest);
        Ok(())
    }
}

/// Multicast sentence receiver.
pub struct AisReceiver {
    socket: UdpSocket,
}

impl AisReceiver {
    /// Bind the group port and join the group on `interface`
    /// (`0.0.0.0` picks the default interface).
    pub fn new(group: Ipv4Addr, port: u16, interface: Ipv4Addr) -> Result<Self> {
        let socket = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, port))?;
        socket.join_multicast_v4(&group, &interface)?;
        log::info!("joined multicast group {group}:{port}");
        Ok(Self { socket })
    }

    /// Read timeout for [`recv`](Self::recv); `None` blocks forever.
    pub fn set_timeout(&self, timeout: Option<Duration>) -> Result<()> {
        self.socket.set_read_timeout(timeout)?;
        Ok(())
    }

    /// Receive one datagram as a trimmed string. Returns `None` on timeout.
    pub fn recv(&self) -> Result<Option<String>> {
        let mut buf = [0u8; 1024];
        match self.socket.recv_from(&mut buf) {
            Ok((len, from)) => {
                log::debug!("received {len} bytes from {from}");
                let text = String::from_utf8_lossy(&buf[..len]).trim().to_string();
                Ok(Some(text))
            }
            Err(e)
                if e.kind() == std::io::ErrorKind::WouldBlock
                    || e.kind() == std::io::ErrorKind::TimedOut =>
            {
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}
