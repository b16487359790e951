use byteorder::{BigEndian, ReadBytesExt};
use std::io::{self, Read};

/// Length-prefixed primitives shared by the OpenSSH wire formats: every
/// variable-length field is a big-endian u32 length followed by that many
/// bytes.
pub trait SshReadExt {
    type Error;

    fn read_ssh_string(&mut self) -> Result<String, Self::Error>;
    fn read_ssh_bytes(&mut self) -> Result<Vec<u8>, Self::Error>;
}

impl<T> SshReadExt for T
where
    T: Read,
{
    type Error = io::Error;

    fn read_ssh_string(&mut self) -> Result<String, Self::Error> {
        let buffer = self.read_ssh_bytes()?;

        Ok(String::from_utf8_lossy(&buffer).to_string())
    }

    fn read_ssh_bytes(&mut self) -> Result<Vec<u8>, Self::Error> {
        let size = self.read_u32::<BigEndian>()? as usize;
        let mut buffer = vec![0; size];
        self.read_exact(&mut buffer)?;

        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::SshReadExt;
    use std::io::Cursor;

    #[test]
    fn ssh_string_decode() {
        let mut cursor = Cursor::new([0, 0, 0, 5, 104, 101, 108, 108, 111].to_vec());

        let ssh_string = cursor.read_ssh_string().unwrap();

        assert_eq!("hello".to_owned(), ssh_string);
        assert_eq!(9, cursor.position());

        let mut cursor = Cursor::new([0, 0, 0, 0].to_vec());

        let ssh_string = cursor.read_ssh_string().unwrap();

        assert_eq!("".to_owned(), ssh_string);
        assert_eq!(4, cursor.position());
    }

    #[test]
    fn byte_array_decode() {
        let mut cursor = Cursor::new([0, 0, 0, 5, 1, 2, 3, 4, 5].to_vec());

        let byte_array = cursor.read_ssh_bytes().unwrap();

        assert_eq!([1, 2, 3, 4, 5].to_vec(), byte_array);
        assert_eq!(9, cursor.position());
    }

    #[test]
    fn empty_input_is_not_a_length() {
        let mut cursor = Cursor::new(Vec::<u8>::new());

        assert!(cursor.read_ssh_bytes().is_err());
    }

    #[test]
    fn truncated_length_header() {
        let mut cursor = Cursor::new([0, 0, 12].to_vec());

        assert!(cursor.read_ssh_bytes().is_err());
    }

    #[test]
    fn declared_length_exceeding_available_bytes() {
        let mut cursor = Cursor::new([0, 0, 0, 12, 8].to_vec());

        let err = cursor.read_ssh_bytes().unwrap_err();

        assert_eq!(std::io::ErrorKind::UnexpectedEof, err.kind());
    }
}
