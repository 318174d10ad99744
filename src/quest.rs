//! Quest tracking
//!
//! Quests move one way: available → active → completed. Progress is fed by
//! game events (enemy kills, item pickups) and rewards are handed out when
//! every objective of an active quest is met.

use crate::item::WEAPON_PART;
use crate::player::Player;
use crate::save::{SaveError, Saveable};
use crate::weapon::Weapon;
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub enum ObjectiveKind {
    DefeatEnemies,
    CollectItem(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuestObjective {
    pub description: String,
    pub kind: ObjectiveKind,
    pub required: u32,
    pub current: u32,
}

impl QuestObjective {
    pub fn new(description: impl Into<String>, kind: ObjectiveKind, required: u32) -> Self {
        QuestObjective {
            description: description.into(),
            kind,
            required,
            current: 0,
        }
    }

    /// Adds progress, never past `required`.
    pub fn advance(&mut self, amount: u32) {
        self.current = self.current.saturating_add(amount).min(self.required);
    }

    pub fn is_complete(&self) -> bool {
        self.current >= self.required
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Reward {
    Gold(u32),
    Experience(u32),
    Weapon(Weapon),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Quest {
    pub id: String,
    pub title: String,
    pub description: String,
    pub objectives: Vec<QuestObjective>,
    pub rewards: Vec<Reward>,
}

impl Quest {
    pub fn is_complete(&self) -> bool {
        self.objectives.iter().all(QuestObjective::is_complete)
    }
}

/// Serialized quest progress
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestSaveData {
    pub available: Vec<String>,
    /// Quest id → progress per objective
    pub active: BTreeMap<String, Vec<u32>>,
    pub completed: Vec<String>,
}

pub struct QuestManager {
    available: Vec<Quest>,
    active: Vec<Quest>,
    completed: Vec<Quest>,
    weapon_cooldown: u32,
}

impl QuestManager {
    pub fn new(weapon_cooldown: u32) -> Self {
        QuestManager {
            available: default_quests(weapon_cooldown),
            active: Vec::new(),
            completed: Vec::new(),
            weapon_cooldown,
        }
    }

    pub fn available(&self) -> &[Quest] {
        &self.available
    }

    pub fn active(&self) -> &[Quest] {
        &self.active
    }

    pub fn completed(&self) -> &[Quest] {
        &self.completed
    }

    pub fn is_completed(&self, id: &str) -> bool {
        self.completed.iter().any(|q| q.id == id)
    }

    /// Moves a quest from available to active. False if it was not available.
    pub fn accept_quest(&mut self, id: &str) -> bool {
        let Some(index) = self.available.iter().position(|q| q.id == id) else {
            return false;
        };
        let quest = self.available.remove(index);
        info!("Quest accepted: {}", quest.title);
        self.active.push(quest);
        true
    }

    /// Accepts the first available quest, returning its title.
    pub fn accept_next(&mut self) -> Option<String> {
        let id = self.available.first()?.id.clone();
        self.accept_quest(&id);
        self.active.last().map(|q| q.title.clone())
    }

    pub fn record_kill(&mut self) {
        self.advance(|kind| *kind == ObjectiveKind::DefeatEnemies, 1);
    }

    pub fn record_pickup(&mut self, item_id: &str, quantity: u32) {
        self.advance(
            |kind| matches!(kind, ObjectiveKind::CollectItem(id) if id == item_id),
            quantity,
        );
    }

    fn advance(&mut self, is_target: impl Fn(&ObjectiveKind) -> bool, amount: u32) {
        for objective in self.active.iter_mut().flat_map(|q| q.objectives.iter_mut()) {
            if is_target(&objective.kind) {
                objective.advance(amount);
            }
        }
    }

    /// Completes every finished active quest and grants its rewards.
    ///
    /// Returns the titles of the quests completed this call.
    pub fn check_completion(&mut self, player: &mut Player) -> Vec<String> {
        let (done, still_active): (Vec<Quest>, Vec<Quest>) =
            self.active.drain(..).partition(Quest::is_complete);
        self.active = still_active;

        let mut titles = Vec::with_capacity(done.len());
        for quest in done {
            grant_rewards(&quest.rewards, player);
            info!("Quest completed: {}", quest.title);
            titles.push(quest.title.clone());
            self.completed.push(quest);
        }
        titles
    }
}

impl Saveable for QuestManager {
    type Data = QuestSaveData;

    fn to_save_data(&self) -> QuestSaveData {
        QuestSaveData {
            available: self.available.iter().map(|q| q.id.clone()).collect(),
            active: self
                .active
                .iter()
                .map(|q| (q.id.clone(), q.objectives.iter().map(|o| o.current).collect()))
                .collect(),
            completed: self.completed.iter().map(|q| q.id.clone()).collect(),
        }
    }

    /// Rebuilds quest state from saved progress. Unknown ids are ignored.
    fn apply_save_data(&mut self, data: &QuestSaveData) -> Result<(), SaveError> {
        *self = QuestManager::new(self.weapon_cooldown);

        for id in &data.completed {
            if let Some(index) = self.available.iter().position(|q| &q.id == id) {
                let quest = self.available.remove(index);
                self.completed.push(quest);
            }
        }

        for (id, progress) in &data.active {
            if let Some(index) = self.available.iter().position(|q| &q.id == id) {
                let mut quest = self.available.remove(index);
                for (objective, value) in quest.objectives.iter_mut().zip(progress) {
                    objective.current = (*value).min(objective.required);
                }
                self.active.push(quest);
            }
        }
        Ok(())
    }
}

pub fn grant_rewards(rewards: &[Reward], player: &mut Player) {
    for reward in rewards {
        match reward {
            Reward::Gold(amount) => player.gold = player.gold.saturating_add(*amount),
            Reward::Experience(amount) => {
                player.experience = player.experience.saturating_add(*amount)
            }
            Reward::Weapon(weapon) => player.add_weapon(weapon.clone()),
        }
    }
}

fn default_quests(weapon_cooldown: u32) -> Vec<Quest> {
    vec![
        Quest {
            id: "QUEST_001".to_string(),
            title: "Clear the Area".to_string(),
            description: "Defeat enemies in the area to make it safe.".to_string(),
            objectives: vec![QuestObjective::new(
                "Defeat enemies",
                ObjectiveKind::DefeatEnemies,
                5,
            )],
            rewards: vec![Reward::Gold(100), Reward::Experience(50)],
        },
        Quest {
            id: "QUEST_002".to_string(),
            title: "Gather Resources".to_string(),
            description: "Collect weapon parts for the merchant.".to_string(),
            objectives: vec![QuestObjective::new(
                "Collect weapon parts",
                ObjectiveKind::CollectItem(WEAPON_PART.to_string()),
                3,
            )],
            rewards: vec![
                Reward::Gold(150),
                Reward::Weapon(Weapon::new("Steel Sword", 25.0, 0, 50.0, weapon_cooldown)),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    #[test]
    fn test_kill_quest_lifecycle() {
        let mut player = Player::new(0, &GameConfig::default());
        let mut quests = QuestManager::new(30);

        // Progress before accepting does not count
        quests.record_kill();
        assert!(quests.accept_quest("QUEST_001"));
        assert!(!quests.accept_quest("QUEST_001"));

        for _ in 0..4 {
            quests.record_kill();
        }
        assert!(quests.check_completion(&mut player).is_empty());

        quests.record_kill();
        assert_eq!(quests.check_completion(&mut player), vec!["Clear the Area".to_string()]);
        assert!(quests.is_completed("QUEST_001"));
        assert_eq!(player.gold, 100);
        assert_eq!(player.experience, 50);
    }

    #[test]
    fn test_collect_quest_grants_weapon() {
        let mut player = Player::new(0, &GameConfig::default());
        let mut quests = QuestManager::new(30);
        quests.accept_quest("QUEST_002");

        quests.record_pickup("health_potion", 5);
        quests.record_pickup(WEAPON_PART, 5);
        quests.check_completion(&mut player);

        assert_eq!(player.gold, 150);
        assert_eq!(player.weapons().last().map(|w| w.name.as_str()), Some("Steel Sword"));
    }

    #[test]
    fn test_accept_next_in_order() {
        let mut quests = QuestManager::new(30);
        assert_eq!(quests.accept_next(), Some("Clear the Area".to_string()));
        assert_eq!(quests.accept_next(), Some("Gather Resources".to_string()));
        assert_eq!(quests.accept_next(), None);
    }

    #[test]
    fn test_save_data_round_trip() {
        let mut player = Player::new(0, &GameConfig::default());
        let mut quests = QuestManager::new(30);
        quests.accept_quest("QUEST_001");
        quests.accept_quest("QUEST_002");
        quests.record_pickup(WEAPON_PART, 3);
        quests.check_completion(&mut player);
        quests.record_kill();
        quests.record_kill();

        let data = quests.to_save_data();
        assert_eq!(data.completed, vec!["QUEST_002".to_string()]);
        assert_eq!(data.active.get("QUEST_001"), Some(&vec![2]));
        assert!(data.available.is_empty());

        let mut restored = QuestManager::new(30);
        restored.apply_save_data(&data).unwrap();
        assert_eq!(restored.to_save_data(), data);
    }

    #[test]
    fn test_load_ignores_unknown_ids() {
        let mut quests = QuestManager::new(30);
        let data = QuestSaveData {
            available: vec![],
            active: BTreeMap::from([("QUEST_999".to_string(), vec![1])]),
            completed: vec!["NOPE".to_string()],
        };
        quests.apply_save_data(&data).unwrap();
        assert_eq!(quests.available().len(), 2);
        assert!(quests.active().is_empty());
    }
}
