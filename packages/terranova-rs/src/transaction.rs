use cosmwasm_std::Uint256;

use crate::{
    evm::EvmAddress,
    rlp::{self, Rlp, RlpError},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsignedTransaction {
    pub nonce: u64,
    pub gas_price: Uint256,
    pub gas_limit: Uint256,
    pub to: Option<EvmAddress>,
    pub value: Uint256,
    pub call_data: Vec<u8>,
    pub chain_id: Option<u64>,
    pub rlp_len: usize,
}

impl UnsignedTransaction {
    /// Accepts both legacy (6 item) and EIP-155 (9 item) unsigned encodings.
    pub fn from_rlp(data: &[u8]) -> Result<Self, RlpError> {
        let (item, rlp_len) = rlp::decode(data)?;
        let fields = item.as_list()?;

        let chain_id = match fields.len() {
            6 => None,
            9 => {
                if fields[7].as_u64()? != 0 || fields[8].as_u64()? != 0 {
                    return Err(RlpError::NonEmptySignature);
                }
                Some(fields[6].as_u64()?)
            }
            n => return Err(RlpError::UnexpectedItemCount(n, "6 or 9")),
        };

        let to = match fields[3].as_bytes()? {
            [] => None,
            bytes => Some(
                EvmAddress::from_slice(bytes)
                    .map_err(|_| RlpError::InvalidAddressLength(bytes.len()))?,
            ),
        };

        Ok(Self {
            nonce: fields[0].as_u64()?,
            gas_price: to_uint256(&fields[1])?,
            gas_limit: to_uint256(&fields[2])?,
            to,
            value: to_uint256(&fields[4])?,
            call_data: fields[5].as_bytes()?.to_vec(),
            chain_id,
            rlp_len,
        })
    }
}

fn to_uint256(item: &Rlp) -> Result<Uint256, RlpError> {
    item.as_uint::<32>().map(Uint256::from_be_bytes)
}
