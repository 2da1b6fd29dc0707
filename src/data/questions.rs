//! The compiled-in civics question bank: the 100 questions of the 2008
//! civics test across its nine sections. Twenty questions are flagged for
//! the 65/20 senior pool.
//!
//! Questions whose answers change with elections are not answered here;
//! they reference a field of `CurrentOfficialsConfig` and resolve when the
//! bank is built.

use crate::civics::{AnswerSource, Category, OfficialsField, QuestionSeed};

use Category::*;
use OfficialsField::*;

pub fn question_seeds() -> Vec<QuestionSeed> {
    vec![
        q(1, PrinciplesOfDemocracy, "What is the supreme law of the land?",
          &["the Constitution"], false),
        q(2, PrinciplesOfDemocracy, "What does the Constitution do?",
          &["sets up the government", "defines the government", "protects basic rights of Americans"], false),
        qe(3, PrinciplesOfDemocracy,
           "The idea of self-government is in the first three words of the Constitution. What are these words?",
           &["We the People"],
           "The preamble opens with these three words to place authority in the people themselves.",
           false),
        q(4, PrinciplesOfDemocracy, "What is an amendment?",
          &["a change to the Constitution", "an addition to the Constitution"], false),
        q(5, PrinciplesOfDemocracy, "What do we call the first ten amendments to the Constitution?",
          &["the Bill of Rights"], false),
        q(6, PrinciplesOfDemocracy, "What is one right or freedom from the First Amendment?",
          &["speech", "religion", "assembly", "press", "petition the government"], true),
        q(7, PrinciplesOfDemocracy, "How many amendments does the Constitution have?",
          &["twenty-seven", "27"], false),
        q(8, PrinciplesOfDemocracy, "What did the Declaration of Independence do?",
          &["announced our independence from Great Britain",
            "declared our independence from Great Britain",
            "said that the United States is free from Great Britain"], false),
        q(9, PrinciplesOfDemocracy, "What are two rights in the Declaration of Independence?",
          &["life and liberty", "liberty and the pursuit of happiness", "life and the pursuit of happiness"], false),
        q(10, PrinciplesOfDemocracy, "What is freedom of religion?",
          &["you can practice any religion, or not practice a religion"], false),
        qe(11, PrinciplesOfDemocracy, "What is the economic system in the United States?",
           &["capitalist economy", "market economy"],
           "Either term is accepted at the interview.", true),
        q(12, PrinciplesOfDemocracy, "What is the \"rule of law\"?",
          &["everyone must follow the law", "leaders must obey the law",
            "government must obey the law", "no one is above the law"], false),
        q(13, SystemOfGovernment, "Name one branch or part of the government.",
          &["Congress", "legislative", "President", "executive", "the courts", "judicial"], true),
        q(14, SystemOfGovernment, "What stops one branch of government from becoming too powerful?",
          &["checks and balances", "separation of powers"], false),
        q(15, SystemOfGovernment, "Who is in charge of the executive branch?",
          &["the President"], false),
        q(16, SystemOfGovernment, "Who makes federal laws?",
          &["Congress", "Senate and House of Representatives", "U.S. or national legislature"], false),
        q(17, SystemOfGovernment, "What are the two parts of the U.S. Congress?",
          &["the Senate and House of Representatives"], true),
        q(18, SystemOfGovernment, "How many U.S. Senators are there?",
          &["one hundred", "100"], false),
        q(19, SystemOfGovernment, "We elect a U.S. Senator for how many years?",
          &["six", "6"], false),
        qo(20, SystemOfGovernment, "Who is one of your state's U.S. Senators now?",
           StateSenators, true),
        q(21, SystemOfGovernment, "The House of Representatives has how many voting members?",
          &["four hundred thirty-five", "435"], false),
        q(22, SystemOfGovernment, "We elect a U.S. Representative for how many years?",
          &["two", "2"], false),
        qo(23, SystemOfGovernment, "Name your U.S. Representative.",
           StateRepresentative, false),
        q(24, SystemOfGovernment, "Who does a U.S. Senator represent?",
          &["all people of the state"], false),
        q(25, SystemOfGovernment, "Why do some states have more Representatives than other states?",
          &["because of the state's population", "because they have more people"], false),
        q(26, SystemOfGovernment, "We elect a President for how many years?",
          &["four", "4"], false),
        qe(27, SystemOfGovernment, "In what month do we vote for President?",
           &["November"],
           "Election Day is the first Tuesday after the first Monday in November.", true),
        qo(28, SystemOfGovernment, "What is the name of the President of the United States now?",
           President, true),
        qo(29, SystemOfGovernment, "What is the name of the Vice President of the United States now?",
           VicePresident, false),
        q(30, SystemOfGovernment, "If the President can no longer serve, who becomes President?",
          &["the Vice President"], false),
        q(31, SystemOfGovernment,
          "If both the President and the Vice President can no longer serve, who becomes President?",
          &["the Speaker of the House"], false),
        q(32, SystemOfGovernment, "Who is the Commander in Chief of the military?",
          &["the President"], false),
        q(33, SystemOfGovernment, "Who signs bills to become laws?",
          &["the President"], false),
        q(34, SystemOfGovernment, "Who vetoes bills?",
          &["the President"], false),
        q(35, SystemOfGovernment, "What does the President's Cabinet do?",
          &["advises the President"], false),
        q(36, SystemOfGovernment, "What are two Cabinet-level positions?",
          &["Secretary of State and Secretary of Defense",
            "Secretary of the Treasury and Attorney General",
            "Secretary of Labor and Secretary of Education",
            "Vice President and Secretary of Homeland Security"], false),
        q(37, SystemOfGovernment, "What does the judicial branch do?",
          &["reviews laws", "explains laws", "resolves disputes", "decides if a law goes against the Constitution"], false),
        q(38, SystemOfGovernment, "What is the highest court in the United States?",
          &["the Supreme Court"], false),
        q(39, SystemOfGovernment, "How many justices are on the Supreme Court?",
          &["nine", "9"], false),
        qo(40, SystemOfGovernment, "Who is the Chief Justice of the United States now?",
           ChiefJustice, false),
        q(41, SystemOfGovernment,
          "Under our Constitution, some powers belong to the federal government. What is one power of the federal government?",
          &["to print money", "to declare war", "to create an army", "to make treaties"], false),
        q(42, SystemOfGovernment,
          "Under our Constitution, some powers belong to the states. What is one power of the states?",
          &["provide schooling and education", "provide protection (police)",
            "provide safety (fire departments)", "give a driver's license", "approve zoning and land use"], false),
        qo(43, SystemOfGovernment, "Who is the Governor of your state now?",
           StateGovernor, false),
        qo(44, SystemOfGovernment, "What is the capital of your state?",
           StateCapital, true),
        q(45, SystemOfGovernment, "What are the two major political parties in the United States?",
          &["Democratic and Republican"], true),
        qo(46, SystemOfGovernment, "What is the political party of the President now?",
           PresidentParty, false),
        qo(47, SystemOfGovernment,
           "What is the name of the Speaker of the House of Representatives now?",
           SpeakerOfTheHouse, false),
        q(48, RightsAndResponsibilities,
          "There are four amendments to the Constitution about who can vote. Describe one of them.",
          &["citizens eighteen and older can vote", "you don't have to pay a poll tax to vote",
            "any citizen can vote", "a male citizen of any race can vote"], false),
        q(49, RightsAndResponsibilities,
          "What is one responsibility that is only for United States citizens?",
          &["serve on a jury", "vote in a federal election"], true),
        q(50, RightsAndResponsibilities, "Name one right only for United States citizens.",
          &["vote in a federal election", "run for federal office"], false),
        q(51, RightsAndResponsibilities,
          "What are two rights of everyone living in the United States?",
          &["freedom of expression and freedom of speech",
            "freedom of assembly and freedom to petition the government",
            "freedom of religion and the right to bear arms"], false),
        q(52, RightsAndResponsibilities,
          "What do we show loyalty to when we say the Pledge of Allegiance?",
          &["the United States", "the flag"], false),
        q(53, RightsAndResponsibilities,
          "What is one promise you make when you become a United States citizen?",
          &["give up loyalty to other countries", "defend the Constitution and laws of the United States",
            "obey the laws of the United States", "serve in the U.S. military if needed",
            "be loyal to the United States"], false),
        q(54, RightsAndResponsibilities, "How old do citizens have to be to vote for President?",
          &["eighteen and older", "18 and older"], true),
        q(55, RightsAndResponsibilities,
          "What are two ways that Americans can participate in their democracy?",
          &["vote and join a political party", "help with a campaign and join a civic group",
            "give an elected official your opinion on an issue", "call Senators and Representatives",
            "run for office and write to a newspaper"], false),
        qe(56, RightsAndResponsibilities, "When is the last day you can send in federal income tax forms?",
           &["April 15"],
           "The deadline shifts by a day or two when the 15th falls on a weekend or holiday, but April 15 is the accepted answer.",
           true),
        q(57, RightsAndResponsibilities, "When must all men register for the Selective Service?",
          &["at age eighteen", "at age 18", "between eighteen and twenty-six", "between 18 and 26"], false),
        q(58, ColonialPeriodAndIndependence, "What is one reason colonists came to America?",
          &["freedom", "political liberty", "religious freedom", "economic opportunity",
            "practice their religion", "escape persecution"], false),
        q(59, ColonialPeriodAndIndependence, "Who lived in America before the Europeans arrived?",
          &["American Indians", "Native Americans"], false),
        q(60, ColonialPeriodAndIndependence,
          "What group of people was taken to America and sold as slaves?",
          &["Africans", "people from Africa"], false),
        q(61, ColonialPeriodAndIndependence, "Why did the colonists fight the British?",
          &["because of high taxes", "taxation without representation",
            "because the British army stayed in their houses", "because they didn't have self-government"], false),
        q(62, ColonialPeriodAndIndependence, "Who wrote the Declaration of Independence?",
          &["Thomas Jefferson", "Jefferson"], false),
        q(63, ColonialPeriodAndIndependence, "When was the Declaration of Independence adopted?",
          &["July 4, 1776"], false),
        q(64, ColonialPeriodAndIndependence, "There were 13 original states. Name three.",
          &["New Hampshire, Massachusetts, and Rhode Island", "Connecticut, New York, and New Jersey",
            "Pennsylvania, Delaware, and Maryland", "Virginia, North Carolina, and South Carolina",
            "Georgia, Virginia, and New York"], false),
        q(65, ColonialPeriodAndIndependence, "What happened at the Constitutional Convention?",
          &["the Constitution was written", "the Founding Fathers wrote the Constitution"], false),
        q(66, ColonialPeriodAndIndependence, "When was the Constitution written?",
          &["1787"], false),
        q(67, ColonialPeriodAndIndependence,
          "The Federalist Papers supported the passage of the U.S. Constitution. Name one of the writers.",
          &["James Madison", "Alexander Hamilton", "John Jay", "Publius"], false),
        q(68, ColonialPeriodAndIndependence, "What is one thing Benjamin Franklin is famous for?",
          &["U.S. diplomat", "oldest member of the Constitutional Convention",
            "first Postmaster General of the United States", "writer of \"Poor Richard's Almanac\"",
            "started the first free libraries"], false),
        q(69, ColonialPeriodAndIndependence, "Who is the \"Father of Our Country\"?",
          &["George Washington", "Washington"], false),
        q(70, ColonialPeriodAndIndependence, "Who was the first President?",
          &["George Washington", "Washington"], true),
        q(71, NineteenthCentury, "What territory did the United States buy from France in 1803?",
          &["the Louisiana Territory", "Louisiana"], false),
        q(72, NineteenthCentury, "Name one war fought by the United States in the 1800s.",
          &["War of 1812", "Mexican-American War", "Civil War", "Spanish-American War"], false),
        q(73, NineteenthCentury, "Name the U.S. war between the North and the South.",
          &["the Civil War", "the War between the States"], false),
        q(74, NineteenthCentury, "Name one problem that led to the Civil War.",
          &["slavery", "economic reasons", "states' rights"], false),
        qe(75, NineteenthCentury, "What was one important thing that Abraham Lincoln did?",
           &["freed the slaves", "saved the Union", "preserved the Union",
             "led the United States during the Civil War"],
           "\"Freed the slaves (Emancipation Proclamation)\" is the most common answer.", true),
        q(76, NineteenthCentury, "What did the Emancipation Proclamation do?",
          &["freed the slaves", "freed slaves in the Confederacy", "freed slaves in most Southern states"], false),
        q(77, NineteenthCentury, "What did Susan B. Anthony do?",
          &["fought for women's rights", "fought for civil rights"], false),
        q(78, RecentHistory, "Name one war fought by the United States in the 1900s.",
          &["World War I", "World War II", "Korean War", "Vietnam War", "Persian Gulf War"], true),
        q(79, RecentHistory, "Who was President during World War I?",
          &["Woodrow Wilson", "Wilson"], false),
        q(80, RecentHistory, "Who was President during the Great Depression and World War II?",
          &["Franklin Roosevelt", "Roosevelt"], false),
        q(81, RecentHistory, "Who did the United States fight in World War II?",
          &["Japan, Germany, and Italy"], false),
        q(82, RecentHistory,
          "Before he was President, Eisenhower was a general. What war was he in?",
          &["World War II"], false),
        q(83, RecentHistory, "During the Cold War, what was the main concern of the United States?",
          &["Communism"], false),
        q(84, RecentHistory, "What movement tried to end racial discrimination?",
          &["civil rights movement"], false),
        q(85, RecentHistory, "What did Martin Luther King, Jr. do?",
          &["fought for civil rights", "worked for equality for all Americans"], true),
        q(86, RecentHistory,
          "What major event happened on September 11, 2001, in the United States?",
          &["terrorists attacked the United States"], false),
        q(87, RecentHistory, "Name one American Indian tribe in the United States.",
          &["Cherokee", "Navajo", "Sioux", "Chippewa", "Choctaw", "Pueblo", "Apache", "Iroquois",
            "Creek", "Blackfeet", "Seminole", "Cheyenne", "Hopi", "Inuit"], false),
        q(88, Geography, "Name one of the two longest rivers in the United States.",
          &["Missouri River", "Mississippi River"], false),
        q(89, Geography, "What ocean is on the West Coast of the United States?",
          &["Pacific Ocean", "Pacific"], false),
        q(90, Geography, "What ocean is on the East Coast of the United States?",
          &["Atlantic Ocean", "Atlantic"], false),
        q(91, Geography, "Name one U.S. territory.",
          &["Puerto Rico", "U.S. Virgin Islands", "American Samoa", "Northern Mariana Islands", "Guam"], false),
        q(92, Geography, "Name one state that borders Canada.",
          &["Maine", "New Hampshire", "Vermont", "New York", "Pennsylvania", "Ohio", "Michigan",
            "Minnesota", "North Dakota", "Montana", "Idaho", "Washington", "Alaska"], false),
        q(93, Geography, "Name one state that borders Mexico.",
          &["California", "Arizona", "New Mexico", "Texas"], false),
        q(94, Geography, "What is the capital of the United States?",
          &["Washington, D.C."], true),
        qe(95, Geography, "Where is the Statue of Liberty?",
           &["New York Harbor", "Liberty Island", "New Jersey", "near New York City", "on the Hudson River"],
           "Liberty Island sits in New York Harbor; several nearby descriptions are accepted.", true),
        q(96, Symbols, "Why does the flag have 13 stripes?",
          &["because there were 13 original colonies", "because the stripes represent the original colonies"], false),
        q(97, Symbols, "Why does the flag have 50 stars?",
          &["because there is one star for each state", "because each star represents a state",
            "because there are 50 states"], true),
        q(98, Symbols, "What is the name of the national anthem?",
          &["The Star-Spangled Banner"], false),
        q(99, Holidays, "When do we celebrate Independence Day?",
          &["July 4"], true),
        q(100, Holidays, "Name two national U.S. holidays.",
          &["New Year's Day and Martin Luther King, Jr. Day", "Presidents' Day and Memorial Day",
            "Juneteenth and Independence Day", "Labor Day and Columbus Day",
            "Veterans Day and Thanksgiving", "Thanksgiving and Christmas"], false),
    ]
}

fn q(
    id: u32,
    category: Category,
    question: &'static str,
    answers: &'static [&'static str],
    senior: bool,
) -> QuestionSeed {
    QuestionSeed {
        id,
        category,
        question,
        answers: AnswerSource::Fixed(answers),
        explanation: None,
        senior,
    }
}

fn qe(
    id: u32,
    category: Category,
    question: &'static str,
    answers: &'static [&'static str],
    explanation: &'static str,
    senior: bool,
) -> QuestionSeed {
    QuestionSeed {
        id,
        category,
        question,
        answers: AnswerSource::Fixed(answers),
        explanation: Some(explanation),
        senior,
    }
}

fn qo(
    id: u32,
    category: Category,
    question: &'static str,
    field: OfficialsField,
    senior: bool,
) -> QuestionSeed {
    QuestionSeed {
        id,
        category,
        question,
        answers: AnswerSource::Officials(field),
        explanation: None,
        senior,
    }
}
