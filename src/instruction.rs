use std::fmt;

/// The closed set of card instructions.
///
/// The first eight are the arithmetic/control family working on the numeric
/// accumulator; the rest work on the text accumulator, most of them through
/// the hanzi query service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mnemonic {
    Add,
    Subtract,
    Multiply,
    Divide,
    Store,
    Load,
    Jump,
    Halt,
    Concatenate,
    Split,
    Decorate,
    Duplicate,
    PasteText,
    FetchMeaning,
    FetchPinyin,
    FetchDialogue,
    FetchPos,
    FetchCategory,
    FetchRhyme,
    FetchSuccessors,
    FetchStructuralFit,
    FetchSemanticFit,
    StoreText,
    LoadText,
}

impl Mnemonic {
    /// Look up a card token. Returns None for tokens outside the
    /// instruction set.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "加" => Some(Mnemonic::Add),
            "减" => Some(Mnemonic::Subtract),
            "乘" => Some(Mnemonic::Multiply),
            "除" => Some(Mnemonic::Divide),
            "存储" => Some(Mnemonic::Store),
            "读取" => Some(Mnemonic::Load),
            "跳转" => Some(Mnemonic::Jump),
            "停机" => Some(Mnemonic::Halt),
            "拼接" => Some(Mnemonic::Concatenate),
            "拆分" => Some(Mnemonic::Split),
            "修饰" => Some(Mnemonic::Decorate),
            "复制" => Some(Mnemonic::Duplicate),
            "粘贴" => Some(Mnemonic::PasteText),
            "取含义" => Some(Mnemonic::FetchMeaning),
            "取拼音" => Some(Mnemonic::FetchPinyin),
            "取对话" => Some(Mnemonic::FetchDialogue),
            "取词性" => Some(Mnemonic::FetchPos),
            "取类别" => Some(Mnemonic::FetchCategory),
            "取前压" => Some(Mnemonic::FetchRhyme),
            "后继" => Some(Mnemonic::FetchSuccessors),
            "取结构位置适配" => Some(Mnemonic::FetchStructuralFit),
            "取语义位置适配" => Some(Mnemonic::FetchSemanticFit),
            "存储文本" => Some(Mnemonic::StoreText),
            "读取文本" => Some(Mnemonic::LoadText),
            _ => None,
        }
    }

    /// The card token this mnemonic is written as in program text.
    pub fn token(&self) -> &'static str {
        match self {
            Mnemonic::Add => "加",
            Mnemonic::Subtract => "减",
            Mnemonic::Multiply => "乘",
            Mnemonic::Divide => "除",
            Mnemonic::Store => "存储",
            Mnemonic::Load => "读取",
            Mnemonic::Jump => "跳转",
            Mnemonic::Halt => "停机",
            Mnemonic::Concatenate => "拼接",
            Mnemonic::Split => "拆分",
            Mnemonic::Decorate => "修饰",
            Mnemonic::Duplicate => "复制",
            Mnemonic::PasteText => "粘贴",
            Mnemonic::FetchMeaning => "取含义",
            Mnemonic::FetchPinyin => "取拼音",
            Mnemonic::FetchDialogue => "取对话",
            Mnemonic::FetchPos => "取词性",
            Mnemonic::FetchCategory => "取类别",
            Mnemonic::FetchRhyme => "取前压",
            Mnemonic::FetchSuccessors => "后继",
            Mnemonic::FetchStructuralFit => "取结构位置适配",
            Mnemonic::FetchSemanticFit => "取语义位置适配",
            Mnemonic::StoreText => "存储文本",
            Mnemonic::LoadText => "读取文本",
        }
    }

    /// Halt is the only instruction that takes no operand.
    pub fn requires_operand(&self) -> bool {
        !matches!(self, Mnemonic::Halt)
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// One parsed program line. Immutable once built by the loader.
#[derive(Debug, Clone)]
pub struct Instruction {
    pub mnemonic: Mnemonic,
    /// Raw operand token as written on the card; resolved on every step.
    pub operand: Option<String>,
    /// 1-based line number in the source text, for diagnostics.
    pub source_line: usize,
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.operand {
            Some(operand) => write!(f, "{} {}", self.mnemonic, operand),
            None => write!(f, "{}", self.mnemonic),
        }
    }
}
