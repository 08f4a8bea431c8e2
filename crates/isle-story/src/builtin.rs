//! The embedded Treasure Island story.

use crate::error::StoryResult;
use crate::story::{Ending, Node, Story, StoryFile};

/// Authoring form of the built-in story.
pub fn treasure_island_file() -> StoryFile {
    StoryFile::new("Treasure Island", "crossroad")
        .with_intro("Your mission is to find the treasure and live to tell the tale.")
        .with_node(
            Node::new(
                "crossroad",
                "A lonely crossroad beside an old signpost. Forest whispers to the left; \
                 a worn path dips to the right. You could also look around.",
            )
            .with_choice("left", "lakeshore")
            .with_choice("right", "pitfall")
            .with_choice("look", "signpost"),
        )
        .with_node(
            Node::new(
                "signpost",
                "You scan the ground carefully. Nothing but ants and dust, and a line \
                 scratched into the signpost: 'The patient cross the water.'",
            )
            .with_choice("back", "crossroad"),
        )
        .with_node(
            Node::new(
                "pitfall",
                "You follow the path to the right. The ground crumbles beneath you and \
                 you fall into a deep hole.",
            )
            .with_ending(Ending::Defeat),
        )
        .with_node(
            Node::new(
                "lakeshore",
                "The forest thins into a moonlit lake. A small island rests far out.",
            )
            .with_prompt("Do you swim across or wait by the shore?")
            .with_choice("swim", "drowned")
            .with_choice("wait", "ferry"),
        )
        .with_node(
            Node::new(
                "drowned",
                "You wade in and strike out for the island. Hungry trout and icy water \
                 overwhelm you.",
            )
            .with_ending(Ending::Defeat),
        )
        .with_node(
            Node::new(
                "ferry",
                "You wait. Mist rolls in. A silent skiff edges from the fog and a hooded \
                 ferryman extends a hand. You have no coin.",
            )
            .with_prompt("Try a riddle or decline?")
            .with_choice("riddle", "riddle")
            .with_choice("decline", "lakeshore"),
        )
        .with_node(
            Node::new(
                "riddle",
                "Ferryman: \"Answer true and the lake will part for you.\"\n\
                 RIDDLE: I speak without a mouth and hear without ears. I have nobody, \
                 but I come alive with wind. What am I?",
            )
            .with_prompt("Your answer?")
            .with_choice("echo", "island")
            .with_choice("wind", "riddle_failed")
            .with_choice("shadow", "riddle_failed"),
        )
        .with_node(
            Node::new(
                "riddle_failed",
                "Ferryman: \"Incorrect.\" The skiff fades into the fog, leaving you on \
                 the cold shore.",
            )
            .with_choice("back", "lakeshore"),
        )
        .with_node(
            Node::new(
                "island",
                "Ferryman: \"Correct.\" Passage is granted, and you arrive unharmed at the \
                 island. A path leads to a lonely house. You could also explore the beach.",
            )
            .with_prompt("Where to?")
            .with_choice("house", "house")
            .with_choice("explore", "beach"),
        )
        .with_node(
            Node::new(
                "beach",
                "You comb the shoreline. Half buried in the sand, a driftwood board bears \
                 a scrawl: 'Gold shines where patience wins. Fire and darkness guard the rest.'",
            )
            .with_choice("back", "island"),
        )
        .with_node(
            Node::new(
                "house",
                "Inside the ruined house, a hall ends in three doors: red, blue, yellow.",
            )
            .with_prompt("Which door?")
            .with_choice("red", "fire")
            .with_choice("blue", "beasts")
            .with_choice("yellow", "treasure"),
        )
        .with_node(
            Node::new(
                "fire",
                "You open the red door. A wall of flame engulfs the hall. Burned by fire.",
            )
            .with_ending(Ending::Defeat),
        )
        .with_node(
            Node::new(
                "beasts",
                "You open the blue door. Darkness and low snarls surround you. Eaten by \
                 beasts.",
            )
            .with_ending(Ending::Defeat),
        )
        .with_node(
            Node::new(
                "treasure",
                "The yellow door opens to a skylit chamber. A chest rests on a stone plinth. \
                 Inside lies the Treasure of the Patient and a note: 'Those who waited \
                 earned passage; those who looked found help.'",
            )
            .with_ending(Ending::Victory),
        )
}

/// The built-in story, validated.
pub fn treasure_island() -> StoryResult<Story> {
    treasure_island_file().build()
}
