//! `ToWire`/`FromWire` impls for the primitive types DNS wire structures
//! are built out of. Reads reconstruct a `Cursor` at the requested offset
//! and report back its final position, keeping the teacher's
//! `byteorder`+`Cursor` idiom for fixed-width fields while honoring the
//! explicit-offset contract `FromWire` requires.
use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use std::io::Cursor;
use std::net::Ipv4Addr;

use crate::error::{DnsError, DnsResult};
use crate::network_order::{FromWire, ToWire};

impl ToWire for u8 {
    /// ```
    /// use dnslib::network_order::ToWire;
    ///
    /// let mut buffer: Vec<u8> = Vec::new();
    /// assert!(255_u8.to_wire(&mut buffer).is_ok());
    /// assert_eq!(buffer, &[0xFF]);
    /// ```
    fn to_wire(&self, buffer: &mut Vec<u8>) -> DnsResult<()> {
        buffer.push(*self);
        Ok(())
    }
}

impl<'a> FromWire<'a> for u8 {
    /// ```
    /// use dnslib::network_order::FromWire;
    ///
    /// let (v, next) = u8::from_wire(&[0xFF], 0).unwrap();
    /// assert_eq!(v, 255);
    /// assert_eq!(next, 1);
    /// ```
    fn from_wire(msg: &'a [u8], offset: usize) -> DnsResult<(Self, usize)> {
        let mut cursor = Cursor::new(msg);
        cursor.set_position(offset as u64);
        let v = cursor
            .read_u8()
            .map_err(|_| DnsError::FormErrDecode("truncated u8".into()))?;
        Ok((v, cursor.position() as usize))
    }
}

impl ToWire for u16 {
    /// ```
    /// use dnslib::network_order::ToWire;
    ///
    /// let mut buffer: Vec<u8> = Vec::new();
    /// assert!(0x1234_u16.to_wire(&mut buffer).is_ok());
    /// assert_eq!(buffer, &[0x12, 0x34]);
    /// ```
    fn to_wire(&self, buffer: &mut Vec<u8>) -> DnsResult<()> {
        buffer.write_u16::<BigEndian>(*self)?;
        Ok(())
    }
}

impl<'a> FromWire<'a> for u16 {
    /// ```
    /// use dnslib::network_order::FromWire;
    ///
    /// let (v, next) = u16::from_wire(&[0x12, 0x34], 0).unwrap();
    /// assert_eq!(v, 0x1234);
    /// assert_eq!(next, 2);
    /// ```
    fn from_wire(msg: &'a [u8], offset: usize) -> DnsResult<(Self, usize)> {
        let mut cursor = Cursor::new(msg);
        cursor.set_position(offset as u64);
        let v = cursor
            .read_u16::<BigEndian>()
            .map_err(|_| DnsError::FormErrDecode("truncated u16".into()))?;
        Ok((v, cursor.position() as usize))
    }
}

impl ToWire for u32 {
    /// ```
    /// use dnslib::network_order::ToWire;
    ///
    /// let mut buffer: Vec<u8> = Vec::new();
    /// assert!(0x12345678_u32.to_wire(&mut buffer).is_ok());
    /// assert_eq!(buffer, &[0x12, 0x34, 0x56, 0x78]);
    /// ```
    fn to_wire(&self, buffer: &mut Vec<u8>) -> DnsResult<()> {
        buffer.write_u32::<BigEndian>(*self)?;
        Ok(())
    }
}

impl<'a> FromWire<'a> for u32 {
    /// ```
    /// use dnslib::network_order::FromWire;
    ///
    /// let (v, next) = u32::from_wire(&[0x12, 0x34, 0x56, 0x78], 0).unwrap();
    /// assert_eq!(v, 0x12345678);
    /// assert_eq!(next, 4);
    /// ```
    fn from_wire(msg: &'a [u8], offset: usize) -> DnsResult<(Self, usize)> {
        let mut cursor = Cursor::new(msg);
        cursor.set_position(offset as u64);
        let v = cursor
            .read_u32::<BigEndian>()
            .map_err(|_| DnsError::FormErrDecode("truncated u32".into()))?;
        Ok((v, cursor.position() as usize))
    }
}

impl ToWire for Ipv4Addr {
    fn to_wire(&self, buffer: &mut Vec<u8>) -> DnsResult<()> {
        buffer.extend_from_slice(&self.octets());
        Ok(())
    }
}

impl<'a> FromWire<'a> for Ipv4Addr {
    /// `A` RDATA is exactly 4 octets; anything else is a malformed record.
    fn from_wire(msg: &'a [u8], offset: usize) -> DnsResult<(Self, usize)> {
        let (raw, next) = u32::from_wire(msg, offset)?;
        Ok((Ipv4Addr::from(raw), next))
    }
}
