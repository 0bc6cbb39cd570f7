use crate::error::{BridgeError, Result};
use log::info;
use std::io::{BufRead, BufReader, Write};
use std::net::{Shutdown, SocketAddr, TcpListener, TcpStream};

/// The session's view of the request-reply channel: receive one request,
/// send one reply, and tear the channel down exactly once. Implementations
/// must preserve message boundaries and ordering.
pub trait Transport {
    /// Block until the next request arrives
    fn recv(&mut self) -> Result<String>;

    /// Send one reply for the request last received
    fn send(&mut self, reply: &str) -> Result<()>;

    /// Tear the channel down. Safe to call more than once.
    fn close(&mut self) -> Result<()>;
}

struct Peer {
    reader: BufReader<TcpStream>,
    writer: TcpStream,
}

/// Newline-delimited JSON over a blocking TCP socket. Binds the configured
/// address and accepts exactly one simulator peer, on first use.
pub struct TcpTransport {
    listener: TcpListener,
    peer: Option<Peer>,
}

impl TcpTransport {
    pub fn bind(addr: &str) -> Result<Self> {
        let listener = TcpListener::bind(addr)?;
        Ok(Self {
            listener,
            peer: None,
        })
    }

    /// The locally bound address (useful when binding port 0)
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    fn peer(&mut self) -> Result<&mut Peer> {
        if self.peer.is_none() {
            let (stream, addr) = self.listener.accept()?;
            info!("simulator connected from {}", addr);
            let writer = stream.try_clone()?;
            self.peer = Some(Peer {
                reader: BufReader::new(stream),
                writer,
            });
        }
        Ok(self.peer.as_mut().unwrap())
    }
}

impl Transport for TcpTransport {
    fn recv(&mut self) -> Result<String> {
        let peer = self.peer()?;
        let mut line = String::new();
        let n = peer.reader.read_line(&mut line)?;
        if n == 0 {
            return Err(BridgeError::ChannelClosed);
        }
        Ok(line.trim_end().to_string())
    }

    fn send(&mut self, reply: &str) -> Result<()> {
        let peer = self.peer()?;
        peer.writer.write_all(reply.as_bytes())?;
        peer.writer.write_all(b"\n")?;
        peer.writer.flush()?;
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        if let Some(peer) = self.peer.take() {
            // NotConnected just means the peer hung up first
            match peer.writer.shutdown(Shutdown::Both) {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotConnected => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpStream;
    use std::thread;

    #[test]
    fn test_request_reply_round_trip() {
        let mut transport = TcpTransport::bind("127.0.0.1:0").unwrap();
        let addr = transport.local_addr().unwrap();

        let client = thread::spawn(move || {
            let stream = TcpStream::connect(addr).unwrap();
            let mut writer = stream.try_clone().unwrap();
            let mut reader = BufReader::new(stream);

            writer.write_all(b"{\"now\":0.0,\"events\":[]}\n").unwrap();
            writer.flush().unwrap();

            let mut reply = String::new();
            reader.read_line(&mut reply).unwrap();
            reply.trim_end().to_string()
        });

        let request = transport.recv().unwrap();
        assert_eq!(request, "{\"now\":0.0,\"events\":[]}");

        transport.send("{\"now\":0.0,\"events\":[]}").unwrap();
        let reply = client.join().unwrap();
        assert_eq!(reply, "{\"now\":0.0,\"events\":[]}");

        transport.close().unwrap();
    }

    #[test]
    fn test_recv_after_peer_disconnect() {
        let mut transport = TcpTransport::bind("127.0.0.1:0").unwrap();
        let addr = transport.local_addr().unwrap();

        let client = thread::spawn(move || {
            // Connect and drop immediately
            let _ = TcpStream::connect(addr).unwrap();
        });
        client.join().unwrap();

        match transport.recv() {
            Err(BridgeError::ChannelClosed) => {}
            other => panic!("expected ChannelClosed, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut transport = TcpTransport::bind("127.0.0.1:0").unwrap();
        transport.close().unwrap();
        transport.close().unwrap();
    }
}
