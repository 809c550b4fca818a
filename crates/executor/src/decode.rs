//! MIPS I instruction decoder.
//!
//! Pure bitfield extraction for the three encodings. All formats share
//! `op` in bits 31..26; R-type instructions (`op = 0`) are told apart by
//! the 6-bit `funct` field.
//!
//! ```text
//! R-type: op[31:26] rs[25:21] rt[20:16] rd[15:11] shamt[10:6] funct[5:0]
//! I-type: op[31:26] rs[25:21] rt[20:16] imm16[15:0]
//! J-type: op[31:26] target26[25:0]
//! ```
//!
//! Sign extension of `imm16` is *not* applied here: the executor decides
//! per opcode whether the immediate is signed and widens it explicitly.

use serde::{Deserialize, Serialize};

const OP_MASK: u32 = 0xFC00_0000;
const OP_SHIFT: u32 = 26;
const RS_MASK: u32 = 0x03E0_0000;
const RS_SHIFT: u32 = 21;
const RT_MASK: u32 = 0x001F_0000;
const RT_SHIFT: u32 = 16;
const RD_MASK: u32 = 0x0000_F800;
const RD_SHIFT: u32 = 11;
const SHAMT_MASK: u32 = 0x0000_07C0;
const SHAMT_SHIFT: u32 = 6;
const FUNCT_MASK: u32 = 0x0000_003F;
const IMM_MASK: u32 = 0x0000_FFFF;
const TARGET_MASK: u32 = 0x03FF_FFFF;

/// Opcode constants (bits 31..26).
pub mod op {
    /// R-type marker; the instruction is selected by `funct`.
    pub const SPECIAL: u8 = 0x00;
    pub const J: u8 = 0x02;
    pub const JAL: u8 = 0x03;
    pub const BEQ: u8 = 0x04;
    pub const BNE: u8 = 0x05;
    pub const BLEZ: u8 = 0x06;
    pub const BGTZ: u8 = 0x07;
    pub const ADDI: u8 = 0x08;
    pub const ADDIU: u8 = 0x09;
    pub const SLTI: u8 = 0x0A;
    pub const SLTIU: u8 = 0x0B;
    pub const ANDI: u8 = 0x0C;
    pub const ORI: u8 = 0x0D;
    pub const XORI: u8 = 0x0E;
    pub const LUI: u8 = 0x0F;
    pub const LB: u8 = 0x20;
    pub const LH: u8 = 0x21;
    pub const LW: u8 = 0x23;
    pub const LBU: u8 = 0x24;
    pub const LHU: u8 = 0x25;
    pub const SB: u8 = 0x28;
    pub const SH: u8 = 0x29;
    pub const SW: u8 = 0x2B;
}

/// Funct constants for `op = SPECIAL` (bits 5..0).
pub mod funct {
    pub const SLL: u8 = 0x00;
    pub const SRL: u8 = 0x02;
    pub const SRA: u8 = 0x03;
    pub const SLLV: u8 = 0x04;
    pub const SRLV: u8 = 0x06;
    pub const SRAV: u8 = 0x07;
    pub const JR: u8 = 0x08;
    pub const JALR: u8 = 0x09;
    pub const SYSCALL: u8 = 0x0C;
    pub const MFHI: u8 = 0x10;
    pub const MTHI: u8 = 0x11;
    pub const MFLO: u8 = 0x12;
    pub const MTLO: u8 = 0x13;
    pub const MULT: u8 = 0x18;
    pub const MULTU: u8 = 0x19;
    pub const DIV: u8 = 0x1A;
    pub const DIVU: u8 = 0x1B;
    pub const ADD: u8 = 0x20;
    pub const ADDU: u8 = 0x21;
    pub const SUB: u8 = 0x22;
    pub const SUBU: u8 = 0x23;
    pub const AND: u8 = 0x24;
    pub const OR: u8 = 0x25;
    pub const XOR: u8 = 0x26;
    pub const NOR: u8 = 0x27;
    pub const SLTU: u8 = 0x29;
    pub const SLT: u8 = 0x2A;
}

/// Decoded MIPS instruction.
///
/// Every field is extracted unconditionally; an instruction only reads the
/// fields its format defines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instruction {
    /// Raw 32-bit instruction word.
    pub bits: u32,
    /// Opcode.
    pub op: u8,
    /// Source register.
    pub rs: u8,
    /// Target register.
    pub rt: u8,
    /// Destination register (R-type).
    pub rd: u8,
    /// Shift amount (R-type).
    pub shamt: u8,
    /// Function code (R-type).
    pub funct: u8,
    /// 16-bit immediate, raw (I-type).
    pub imm: u16,
    /// 26-bit jump target, unshifted (J-type).
    pub target: u32,
}

impl Instruction {
    /// Decode a 32-bit instruction word.
    pub fn decode(bits: u32) -> Self {
        Self {
            bits,
            op: ((bits & OP_MASK) >> OP_SHIFT) as u8,
            rs: ((bits & RS_MASK) >> RS_SHIFT) as u8,
            rt: ((bits & RT_MASK) >> RT_SHIFT) as u8,
            rd: ((bits & RD_MASK) >> RD_SHIFT) as u8,
            shamt: ((bits & SHAMT_MASK) >> SHAMT_SHIFT) as u8,
            funct: (bits & FUNCT_MASK) as u8,
            imm: (bits & IMM_MASK) as u16,
            target: bits & TARGET_MASK,
        }
    }

    /// Check if this is an R-type instruction.
    #[inline]
    pub fn is_r_type(&self) -> bool {
        self.op == op::SPECIAL
    }
}

/// Widen a 16-bit value to 32 bits, replicating bit 15.
#[inline]
pub fn sign_extend16(imm: u16) -> u32 {
    imm as i16 as i32 as u32
}

/// Widen an 8-bit value to 32 bits, replicating bit 7.
#[inline]
pub fn sign_extend8(byte: u8) -> u32 {
    byte as i8 as i32 as u32
}
