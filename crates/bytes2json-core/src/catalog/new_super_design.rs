//! `newSuperDesign.bytes`: challenge designs with battles, rules and
//! rewards.

use crate::schema;
use crate::schema::{Element, FieldKind::*, Schema};

pub static ACHIEVEMENT: Schema = schema!("IAchievement" {
    "BranchID" => Int32,
    "RuleID" => Int32,
});

pub static CONFIGURE: Schema = schema!("IConfigure" {
    "ExchangeID" => OptionalArray(Element::Int32),
    "ExchangeProductID" => OptionalArray(Element::Int32),
    "Exchange_mintmark" => Int32,
    "FailTimes" => Int32,
    "ProgressValue" => Int32,
    "TimeValue" => Int32,
    "Times" => Int32,
    "needmon" => Int32,
});

pub static TASK: Schema = schema!("ITaskItem" {
    "BattleBoss" => Int32,
    "BattleType" => Int32,
    "Battlelevel" => Int32,
    "Desc" => Text,
    "ID" => Int32,
});

pub static EASY_BATTLE: Schema = schema!("IEasyBattle" {
    "BattleCnt" => Int32,
    "Desc" => Text,
    "Out" => Int32,
    "Task" => OptionalArray(Element::Record(&TASK)),
    "TaskStyle" => Int32,
});

pub static NORMAL_BATTLE: Schema = schema!("INormalBattle" {
    "BattleCnt" => Int32,
    "Desc" => Text,
    "Out" => Int32,
    "RuleID" => Text,
    "Task" => OptionalArray(Element::Record(&TASK)),
    "TaskStyle" => Int32,
});

pub static REWARD: Schema = schema!("IReward" {
    "GainValue" => Int32,
    "ItemID" => Int32,
    "MintMarkID" => Int32,
    "MonsterID" => Int32,
});

pub static RULE: Schema = schema!("IRuleItem" {
    "Args" => Text,
    "CheckTips" => Text,
    "FailTips" => Text,
    "ID" => Int32,
    "MouldID" => Int32,
    "RepeatTips" => Text,
    "UserInfo" => Text,
});

pub static RULES: Schema = schema!("IRules" {
    "Rule" => OptionalArray(Element::Record(&RULE)),
});

pub static SWEEP: Schema = schema!("ISweep" {
    "ProductID" => OptionalArray(Element::Int32),
});

pub static DESIGN: Schema = schema!("IDesignItem" {
    "Achievement" => OptionalStruct(&ACHIEVEMENT),
    "Configure" => OptionalStruct(&CONFIGURE),
    "EasyBattle" => OptionalStruct(&EASY_BATTLE),
    "HardBattle" => OptionalStruct(&NORMAL_BATTLE),
    "ID" => Int32,
    "NormalBattle" => OptionalStruct(&NORMAL_BATTLE),
    "Reward" => OptionalStruct(&REWARD),
    "Rules" => OptionalStruct(&RULES),
    "Sweep" => OptionalStruct(&SWEEP),
});

pub static DESIGNS: Schema = schema!("IRoot" {
    "Design" => OptionalArray(Element::Record(&DESIGN)),
});

pub static ROOT: Schema = schema!("IRootInterface" {
    "Root" => OptionalStruct(&DESIGNS),
});
