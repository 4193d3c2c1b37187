// src/logic/mod.rs
//! ゲームの純粋なロジック (山札づくり・ルール判定・自動移動) をまとめるモジュール。

pub mod auto_move;
pub mod deck;
pub mod rules;
