//! `achievement.bytes`: achievement types, branches and rules.

use crate::schema;
use crate::schema::{Element, FieldKind::*, Schema};

pub static RULE: Schema = schema!("IRuleItem" {
    "AbilityTitle" => Int32,
    "AchievementPoint" => Int32,
    "Desc" => Text,
    "ID" => Int32,
    "SpeNameBonus" => Int32,
    "Threshold" => Text,
    "abtext" => Text,
    "achName" => Text,
    "hide" => Int32,
    "proicon" => Int32,
    "title" => Text,
    "titleColor" => Text,
});

pub static BRANCH: Schema = schema!("IBranchItem" {
    "Desc" => Text,
    "ID" => Int32,
    "IsSingle" => Int32,
    "Rule" => OptionalArray(Element::Record(&RULE)),
    "_text" => Text,
    "isShowPro" => Int32,
});

pub static BRANCHES: Schema = schema!("IBranchesItem" {
    "Branch" => OptionalArray(Element::Record(&BRANCH)),
});

pub static TYPE: Schema = schema!("ITypeItem" {
    "Branches" => OptionalArray(Element::Record(&BRANCHES)),
    "Desc" => Text,
    "ID" => Int32,
});

pub static RULES: Schema = schema!("IAchievementRules" {
    "type" => OptionalArray(Element::Record(&TYPE)),
});

pub static ROOT: Schema = schema!("IRootInterface" {
    "AchievementRules" => OptionalStruct(&RULES),
});
