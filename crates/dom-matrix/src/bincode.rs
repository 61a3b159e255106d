use glam::DMat4;

use crate::matrix::DomMatrix;

impl bincode::enc::Encode for DomMatrix {
    fn encode<E: bincode::enc::Encoder>(
        &self,
        encoder: &mut E,
    ) -> Result<(), bincode::error::EncodeError> {
        bincode::Encode::encode(&self.inner.to_cols_array(), encoder)?;
        bincode::Encode::encode(&self.is_2d, encoder)?;
        Ok(())
    }
}

impl<C> bincode::de::Decode<C> for DomMatrix {
    fn decode<D: bincode::de::Decoder<Context = C>>(
        decoder: &mut D,
    ) -> Result<Self, bincode::error::DecodeError> {
        let cells: [f64; 16] = bincode::Decode::decode(decoder)?;
        let is_2d = bincode::Decode::decode(decoder)?;
        Ok(Self {
            inner: DMat4::from_cols_array(&cells),
            is_2d,
        })
    }
}
